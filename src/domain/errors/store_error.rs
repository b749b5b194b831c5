//! Persistence errors surfaced by the onboarding store port.

use thiserror::Error;

/// Errors raised while reading or writing the onboarding record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform state directory could not be determined.
    #[error("failed to determine state directory")]
    StateDirNotFound,

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization failure.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
