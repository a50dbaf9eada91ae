//! Common implementations and shared functionality for the sharedkey library
//!
//! This crate holds the containers used to keep secret intermediate values
//! (private-key seeds, raw Diffie-Hellman output) scoped and wiped.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};
