//! Cryptographic primitives for the sharedkey library
//!
//! This crate provides the Curve25519 arithmetic behind the shared-key
//! derivation, along with the hash functions and HKDF used around it.
//!
//! # Security Features
//!
//! - Field and point operations run the same sequence of steps regardless of
//!   secret values; conditional swaps are done with masks.
//! - Scalars and field elements derived from private keys are zeroized.
//! - Point decoding rejects non-canonical encodings before any arithmetic.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, DecodeError, Error, Result};

// Hash function re-exports
pub mod hash;
pub use hash::{Keccak512, Sha256, Sha512};

// KDF implementations
pub mod kdf;
pub use kdf::HkdfSha256;

// Elliptic Curve primitives
pub mod ec;
pub use ec::ed25519::{CompressedPoint, EdwardsPoint, FieldElement, Scalar};

// Re-export security types from sharedkey-common
pub use sharedkey_common::security::{SecretBuffer, ZeroizeGuard};
