use libp2p::{Multiaddr, PeerId};

use crate::base::{Identity, PrivKey, PubKey};
use crate::bogus::{self, BogusPrivateKey};
use crate::types::Result;

use super::address::rand_local_tcp_address;
use super::peer_id::peer_id_from_private_key;

/// Test peer backed by a bogus key, listening on a random local TCP port.
#[derive(Debug, Clone)]
pub struct BogusIdentity {
    key: BogusPrivateKey,
    id: PeerId,
    addr: Multiaddr,
}

impl BogusIdentity {
    pub fn new(key: BogusPrivateKey, addr: Multiaddr) -> Result<Self> {
        let id = peer_id_from_private_key(&key)?;

        Ok(Self { key, id, addr })
    }
}

impl Identity for BogusIdentity {
    fn id(&self) -> PeerId {
        self.id
    }

    fn address(&self) -> &Multiaddr {
        &self.addr
    }

    fn private_key(&self) -> &dyn PrivKey {
        &self.key
    }

    fn public_key(&self) -> Box<dyn PubKey> {
        self.key.public()
    }
}

pub fn rand_identity() -> Result<BogusIdentity> {
    BogusIdentity::new(bogus::rand_private_key()?, rand_local_tcp_address())
}

/// Like [`rand_identity`], but fails the calling test on error.
#[track_caller]
pub fn rand_identity_or_fatal() -> BogusIdentity {
    bogus::or_fatal(rand_identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Key;
    use crate::libp2p::peer_id::peer_id_from_public_key;

    #[test]
    fn id_is_derived_from_public_key() {
        let identity = rand_identity().unwrap();

        assert_eq!(
            identity.id(),
            peer_id_from_public_key(identity.public_key().as_ref()).unwrap()
        );
    }

    #[test]
    fn keys_are_delegated() {
        let key = BogusPrivateKey::from(vec![1, 2, 3, 4, 5]);
        let addr: Multiaddr = "/ip4/127.0.0.1/tcp/4001".parse().unwrap();

        let identity = BogusIdentity::new(key.clone(), addr.clone()).unwrap();

        assert_eq!(identity.address(), &addr);
        assert_eq!(identity.private_key().raw(), key.raw());
        assert_eq!(identity.public_key().raw(), key.raw());
        assert!(identity.private_key().equals(&key.to_public()));
    }

    #[test]
    fn random_identities_differ() {
        let a = rand_identity_or_fatal();
        let b = rand_identity_or_fatal();

        assert_ne!(a.id(), b.id());
    }
}
