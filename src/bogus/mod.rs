//! Cheap stand-ins for key pairs, so tests can set up peers without paying for key generation.
//!
//! Nothing here is secure: signatures and ciphertexts are the input bytes reversed.

mod private;
mod public;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::types::Result;

pub use private::BogusPrivateKey;
pub use public::BogusPublicKey;

pub const KEY_LENGTH: usize = 5;

pub fn rand_private_key() -> Result<BogusPrivateKey> {
    let mut bytes = vec![0u8; KEY_LENGTH];
    OsRng.try_fill_bytes(&mut bytes)?;

    Ok(BogusPrivateKey::from(bytes))
}

pub fn rand_public_key() -> Result<BogusPublicKey> {
    Ok(rand_private_key()?.to_public())
}

/// Like [`rand_private_key`], but fails the calling test on error.
#[track_caller]
pub fn rand_private_key_or_fatal() -> BogusPrivateKey {
    or_fatal(rand_private_key())
}

/// Like [`rand_public_key`], but fails the calling test on error.
#[track_caller]
pub fn rand_public_key_or_fatal() -> BogusPublicKey {
    or_fatal(rand_public_key())
}

#[track_caller]
pub(crate) fn or_fatal<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}
