//! Symmetric ciphers keyed by a derived shared key
//!
//! Both ciphers take a `SharedKey256` produced by the key agreement and a
//! caller-supplied IV. They wrap the RustCrypto `aes`, `cbc` and `aes-gcm`
//! crates and report failures through the unified API error type.

#![forbid(unsafe_code)]

pub mod aes;
pub mod error;

// Re-export main types for convenience
pub use aes::{AesCbcCipher, AesGcmCipher};
pub use sharedkey_api::Cipher;

// Re-export the API error system instead of custom error types
pub use sharedkey_api::error::{validate, Error, Result};
