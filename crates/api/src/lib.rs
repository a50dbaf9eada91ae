//! Public API traits and types for the sharedkey library
//!
//! This crate provides the public API surface shared by the agreement and
//! cipher crates: the error type, the key value types and the trait seams.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{PrivateKey, PublicKey, SharedKey256};

pub use traits::{Cipher, KeyAgreement};
