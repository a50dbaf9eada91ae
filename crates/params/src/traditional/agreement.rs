//! Constants for the shared-key derivation

/// Size of a private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a compact public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of the raw Diffie-Hellman output in bytes
pub const SHARED_SECRET_SIZE: usize = 32;

/// Size of the HKDF output in bytes
pub const SHARED_KEY_SIZE: usize = 32;

/// Size of the private-key digest the scalar is taken from
pub const SCALAR_DIGEST_SIZE: usize = 64;

/// HKDF info string for the Symbol network
pub const SYMBOL_HKDF_INFO: &[u8] = b"catapult";

/// HKDF info string for the NEM network
pub const NEM_HKDF_INFO: &[u8] = b"nem-nis1";
