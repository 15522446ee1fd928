//! Bogus key pairs and peer identities for tests that need a libp2p identity but not real
//! cryptography.

pub mod base;
pub mod bogus;
pub mod types;
pub mod utils;

#[cfg(feature = "libp2p")]
pub mod libp2p;

pub use crate::base::types::KeyType;
pub use crate::base::*;
pub use crate::bogus::*;
