use std::any::Any;

use crate::base::types::KeyType;
use crate::base::{Key, PubKey};
use crate::utils::bytes::Reversed;

/// Public half of a bogus key pair. Holds the very same bytes as the private key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BogusPublicKey(Vec<u8>);

impl From<Vec<u8>> for BogusPublicKey {
    fn from(value: Vec<u8>) -> Self {
        BogusPublicKey(value)
    }
}

impl From<&[u8]> for BogusPublicKey {
    fn from(value: &[u8]) -> Self {
        BogusPublicKey(value.to_vec())
    }
}

impl Key for BogusPublicKey {
    fn equals(&self, other: &dyn Key) -> bool {
        other
            .downcast_ref::<BogusPublicKey>()
            .is_some_and(|other| other.0 == self.0)
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

impl PubKey for BogusPublicKey {
    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        tracing::warn!("BogusPublicKey::verify -- this better be a test!");
        data == signature.reversed()
    }

    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        tracing::warn!("BogusPublicKey::encrypt -- this better be a test!");
        plaintext.reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::bogus::BogusPrivateKey;

    #[test]
    fn verify_accepts_reversed_signature() {
        let key = BogusPublicKey::from(vec![9, 9, 9, 9, 9]);

        assert!(key.verify(&[1, 2, 3], &[3, 2, 1]));
        assert!(!key.verify(&[1, 2, 3], &[1, 2, 3]));
        assert!(!key.verify(&[1, 2, 3], &[3, 2]));
        assert!(key.verify(&[], &[]));
    }

    #[test]
    fn encrypt_reverses_plaintext() {
        let key = BogusPublicKey::from(vec![0; 5]);

        assert_eq!(key.encrypt(b"abc"), b"cba".to_vec());
    }

    #[test]
    fn bytes_are_unmodified() {
        let bytes = vec![0xde, 0xad, 0xbe, 0xef, 0x01];
        let key = BogusPublicKey::from(bytes.as_slice());

        assert_eq!(key.to_bytes(), bytes);
        assert_eq!(key.raw(), bytes.as_slice());
        assert_eq!(key.key_type(), KeyType::Rsa);
    }

    proptest! {
        #[test]
        fn prop_bytes_match_construction(bytes in any::<Vec<u8>>()) {
            let from_vec = BogusPublicKey::from(bytes.clone());
            let from_slice = BogusPublicKey::from(bytes.as_slice());

            prop_assert_eq!(from_vec.to_bytes(), bytes.clone());
            prop_assert_eq!(from_slice.raw(), bytes.as_slice());
            prop_assert!(from_vec.equals(&from_slice));
        }

        #[test]
        fn prop_verify_rejects_unreversed_signature(data in any::<Vec<u8>>()) {
            let key = BogusPublicKey::from(vec![0; 5]);
            let palindrome = data.iter().eq(data.iter().rev());

            prop_assert_eq!(key.verify(&data, &data), palindrome);
        }
    }

    #[test]
    fn equals_only_public_keys_with_same_bytes() {
        let key = BogusPublicKey::from(vec![1, 2, 3, 4, 5]);

        assert!(key.equals(&BogusPublicKey::from(vec![1, 2, 3, 4, 5])));
        assert!(!key.equals(&BogusPublicKey::from(vec![5, 4, 3, 2, 1])));
        assert!(!key.equals(&BogusPrivateKey::from(vec![1, 2, 3, 4, 5])));
    }
}
