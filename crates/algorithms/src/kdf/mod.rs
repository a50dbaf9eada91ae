//! Key Derivation Functions
//!
//! Only HKDF with SHA-256 is needed: it turns the raw Diffie-Hellman output
//! into the final symmetric key.

pub mod hkdf;

pub use self::hkdf::HkdfSha256;
