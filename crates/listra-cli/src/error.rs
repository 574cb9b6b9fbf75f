//! Error types for listra-cli

use thiserror::Error;

/// Result type alias for listra-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in listra-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from listra-core
    #[error("{0}")]
    Core(#[from] listra_core::Error),

    /// An operation recorded a synchronization failure
    #[error("{0}")]
    Sync(String),
}

impl Error {
    /// Creates an error from a recorded synchronization failure string.
    pub fn sync<S: Into<String>>(message: S) -> Self {
        Error::Sync(message.into())
    }
}
