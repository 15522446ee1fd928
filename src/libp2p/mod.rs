mod address;
mod identity;
mod peer_id;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::types::{Error, Result};

pub use address::rand_local_tcp_address;
pub use identity::{rand_identity, rand_identity_or_fatal, BogusIdentity};
pub use peer_id::{peer_id_from_private_key, peer_id_from_public_key};

/// Installs a global `fmt` subscriber, so the warnings emitted by bogus keys show up in test output.
pub fn enable_log(config: LogConfig) {
    if let Err(e) = init_tracing_subscriber(&config) {
        match config.level_filter {
            LevelFilter::OFF => {}
            _ => println!("Failed to init tracing: {e}"),
        }
    }
}

fn init_tracing_subscriber(config: &LogConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_ansi(config.with_ansi)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(config.level_filter.into())
                .from_env()
                .map_err(|e| Error::Log(e.to_string()))?,
        )
        .try_init()
        .map_err(|e| Error::Log(e.to_string()))
}

pub struct LogConfig {
    pub with_ansi: bool,
    pub level_filter: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            with_ansi: true,
            level_filter: LevelFilter::INFO,
        }
    }
}
