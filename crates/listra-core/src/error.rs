//! Error types for the Listra core library.

/// Errors that can occur while synchronizing with the collection resource.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level HTTP failure (connection refused, timeout, etc.)
    #[error("HTTP error: {message}")]
    Http {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The collection resource answered with a non-success status code
    #[error("Unexpected status: {status}")]
    UnexpectedStatus {
        /// HTTP status code returned by the resource
        status: u16,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (config file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// An item operation named an id that is not in the local list
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// Id that was not found
        id: u64,
    },

    /// A create was attempted with empty item text
    #[error("Item text must not be empty")]
    EmptyItemText,
}

/// Convenience `Result` type alias for Listra operations.
///
/// This is the standard Result type used throughout the Listra codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Retryable errors include transient failures like connection drops
    /// and server-side unavailability. Validation and configuration errors
    /// are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http { .. } => true,
            Error::Io(_) => true,
            // 5xx is transient; everything else the resource said on purpose.
            Error::UnexpectedStatus { status } => *status >= 500,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
            Error::ItemNotFound { .. } => false,
            Error::EmptyItemText => false,
        }
    }

    /// Creates a new HTTP error with a message.
    pub fn http<S: Into<String>>(message: S) -> Self {
        Error::Http {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new HTTP error with a message and source error.
    pub fn http_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Http {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an error for a non-success HTTP status.
    pub fn status(status: u16) -> Self {
        Error::UnexpectedStatus { status }
    }
}
