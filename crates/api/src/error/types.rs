//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Primary error type for cryptographic operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Decryption error
    #[error("Decryption failed: {context}: {message}")]
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Authentication failed error
    #[error("Authentication failed: {context}")]
    AuthenticationFailed {
        context: &'static str,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
