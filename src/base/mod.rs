pub mod types;

use std::any::Any;
use std::fmt::Debug;

#[cfg(feature = "libp2p")]
use libp2p::{Multiaddr, PeerId};

use self::types::KeyType;

pub trait Key: Debug + Send + Sync {
    /// Compares against another key of any kind. Keys of a different concrete kind are never equal.
    fn equals(&self, other: &dyn Key) -> bool;

    /// Key bytes as held, without the protobuf wrapper.
    fn raw(&self) -> &[u8];
    /// Owned copy of the key bytes. Unlike libp2p's `encode_protobuf`, no protobuf wrapper is applied.
    fn to_bytes(&self) -> Vec<u8>;

    fn key_type(&self) -> KeyType;

    fn as_any(&self) -> &dyn Any;
}

impl<'a> dyn Key + 'a {
    pub fn downcast_ref<K: Key + 'static>(&self) -> Option<&K> {
        self.as_any().downcast_ref::<K>()
    }
}

pub trait PrivKey: Key {
    fn sign(&self, message: &[u8]) -> Vec<u8>;
    fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8>;

    fn public(&self) -> Box<dyn PubKey>;

    /// Secret shared with a remote peer during a handshake.
    fn gen_secret(&self) -> Vec<u8>;
}

pub trait PubKey: Key {
    fn verify(&self, data: &[u8], signature: &[u8]) -> bool;
    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8>;
}

/// What a test harness needs to stand up a peer: who it is, where it listens and its keys.
#[cfg(feature = "libp2p")]
pub trait Identity: Debug + Send + Sync {
    fn id(&self) -> PeerId;
    fn address(&self) -> &Multiaddr;

    fn private_key(&self) -> &dyn PrivKey;
    fn public_key(&self) -> Box<dyn PubKey>;
}
