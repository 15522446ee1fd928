use std::any::Any;

use crate::base::types::KeyType;
use crate::base::{Key, PrivKey, PubKey};
use crate::utils::bytes::Reversed;

use super::BogusPublicKey;

/// Private half of a bogus key pair. Signing and decryption only reverse the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BogusPrivateKey(Vec<u8>);

impl BogusPrivateKey {
    pub fn to_public(&self) -> BogusPublicKey {
        BogusPublicKey::from(self.0.clone())
    }
}

impl From<Vec<u8>> for BogusPrivateKey {
    fn from(value: Vec<u8>) -> Self {
        BogusPrivateKey(value)
    }
}

impl From<&[u8]> for BogusPrivateKey {
    fn from(value: &[u8]) -> Self {
        BogusPrivateKey(value.to_vec())
    }
}

impl Key for BogusPrivateKey {
    // Matches against the public kind, not the private one: a private key equals the public key
    // carrying its bytes and never another private key.
    fn equals(&self, other: &dyn Key) -> bool {
        other
            .downcast_ref::<BogusPublicKey>()
            .is_some_and(|other| other.raw() == self.0.as_slice())
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    fn key_type(&self) -> KeyType {
        KeyType::Rsa
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PrivKey for BogusPrivateKey {
    fn sign(&self, message: &[u8]) -> Vec<u8> {
        tracing::warn!("BogusPrivateKey::sign -- this better be a test!");
        message.reversed()
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8> {
        tracing::warn!("BogusPrivateKey::decrypt -- this better be a test!");
        ciphertext.reversed()
    }

    fn public(&self) -> Box<dyn PubKey> {
        Box::new(self.to_public())
    }

    fn gen_secret(&self) -> Vec<u8> {
        self.0.clone()
    }
}
