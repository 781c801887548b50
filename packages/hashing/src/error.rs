//! Error handling for the digest façade

use thiserror::Error;

/// Hashing-specific errors
///
/// Every variant is raised before any block is processed. Byte input never
/// fails once it reaches a digest algorithm.
#[derive(Debug, Error)]
pub enum HashError {
    /// The message text cannot be represented in the requested encoding
    #[error("cannot encode message as {encoding}: {reason}")]
    Encoding {
        /// Encoding label as supplied by the caller
        encoding: String,
        /// What went wrong
        reason: String,
    },

    /// The dispatch tag does not name a supported algorithm
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The configuration document is malformed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HashError {
    /// Create an encoding error
    #[must_use]
    pub fn encoding(encoding: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Encoding {
            encoding: encoding.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown algorithm error
    #[must_use]
    pub fn unknown_algorithm(tag: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(tag.into())
    }

    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<serde_json::Error> for HashError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
