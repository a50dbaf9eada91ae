//! Error handling for key agreement

use sharedkey_algorithms::error::{DecodeError, Error as PrimitiveError};
use sharedkey_api::error::Error as CoreError;
use thiserror::Error;

/// Error type for key agreement
///
/// `NonCanonicalEncoding` and `InvalidPoint` are terminal: the peer key is
/// unusable and retrying with it gives the same answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The public key's y coordinate is not reduced modulo p
    #[error("public key encoding is not canonical")]
    NonCanonicalEncoding,

    /// The public key is off the curve, outside the prime-order subgroup,
    /// or the identity
    #[error("public key is not a valid point")]
    InvalidPoint,

    /// Invalid key format
    #[error("Invalid {key_type} key: {reason}")]
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Primitive error
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),
}

/// Alias used where the agreement error sits next to other error types
pub type KeyAgreementError = Error;

/// Result type for key agreement
pub type Result<T> = core::result::Result<T, Error>;

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::NonCanonicalEncoding => Error::NonCanonicalEncoding,
            DecodeError::NotOnCurve => Error::InvalidPoint,
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::NonCanonicalEncoding => CoreError::InvalidKey {
                context: "public key encoding",
                message: "encoding is not canonical".to_string(),
            },
            Error::InvalidPoint => CoreError::InvalidKey {
                context: "public key point",
                message: "not a valid prime-order point".to_string(),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::Primitive(e) => e.into(),
        }
    }
}

// Include validation submodule
pub mod validate;
