use std::fmt;

use rand::rand_core::OsError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Randomness(OsError),
    PeerId(String),
    Log(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Randomness(e) => write!(f, "Could not read random key bytes: {e}"),
            Error::PeerId(e) => write!(f, "Could not derive peer id: {e}"),
            Error::Log(e) => write!(f, "Could not init tracing: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Randomness(e) => Some(e),
            Error::PeerId(_) | Error::Log(_) => None,
        }
    }
}

impl From<OsError> for Error {
    fn from(value: OsError) -> Self {
        Error::Randomness(value)
    }
}
