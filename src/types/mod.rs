pub(crate) mod result;

pub use result::{Error, Result};
