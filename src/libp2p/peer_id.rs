use libp2p::multiaddr::multihash::Multihash;
use libp2p::PeerId;
use prost::Message;
use sha2::{Digest, Sha256};

use crate::base::types::KeyType;
use crate::base::{PrivKey, PubKey};
use crate::types::{Error, Result};

/// Encoded keys up to this length are inlined into the peer id instead of hashed.
const MAX_INLINE_KEY_LENGTH: usize = 42;

const MULTIHASH_IDENTITY: u64 = 0x00;
const MULTIHASH_SHA2_256: u64 = 0x12;

pub fn peer_id_from_public_key(key: &dyn PubKey) -> Result<PeerId> {
    let encoded = encode_public_key(key);
    let multihash = if encoded.len() <= MAX_INLINE_KEY_LENGTH {
        Multihash::<64>::wrap(MULTIHASH_IDENTITY, &encoded)
    } else {
        Multihash::<64>::wrap(MULTIHASH_SHA2_256, &Sha256::digest(&encoded))
    }
    .map_err(|e| Error::PeerId(e.to_string()))?;

    PeerId::from_multihash(multihash)
        .map_err(|mh| Error::PeerId(format!("unsupported multihash code {:#x}", mh.code())))
}

pub fn peer_id_from_private_key(key: &dyn PrivKey) -> Result<PeerId> {
    peer_id_from_public_key(key.public().as_ref())
}

/// The libp2p `PublicKey` protobuf message. Both fields are proto2 `required`, so an RSA
/// type (`0`) is still written out.
#[derive(Clone, PartialEq, Message)]
struct PublicKeyMessage {
    #[prost(enumeration = "KeyType", required, tag = "1")]
    r#type: i32,
    #[prost(bytes = "vec", required, tag = "2")]
    data: Vec<u8>,
}

fn encode_public_key(key: &dyn PubKey) -> Vec<u8> {
    PublicKeyMessage {
        r#type: key.key_type().into(),
        data: key.to_bytes(),
    }
    .encode_to_vec()
}
