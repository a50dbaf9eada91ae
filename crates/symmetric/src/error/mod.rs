//! Error handling for symmetric cipher operations
//!
//! The ciphers report through the API error type; this module holds the
//! conversions from the RustCrypto error types.

pub use sharedkey_api::error::{validate, Error, Result};

/// Map a key or IV length rejection from the cipher crates
pub fn from_invalid_length(context: &'static str, expected: usize, actual: usize) -> Error {
    Error::InvalidLength {
        context,
        expected,
        actual,
    }
}

/// Map a padding failure on CBC decryption
pub fn from_unpad_error(context: &'static str) -> Error {
    Error::DecryptionFailed {
        context,
        message: "invalid padding".to_string(),
    }
}

/// Map a tag verification failure on GCM decryption
pub fn from_aead_error(context: &'static str) -> Error {
    Error::AuthenticationFailed { context }
}
