//! Constant values for sharedkey cryptographic operations
//!
//! Curve parameters are stored as 32-byte little-endian encodings so the
//! field code can load them through the same path as untrusted input.

#![no_std]

pub mod traditional;
pub mod utils;
