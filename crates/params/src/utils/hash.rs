//! Constants for hash functions

/// Output size of SHA-256 in bytes (HKDF PRF)
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of Keccak-512 in bytes
pub const KECCAK512_OUTPUT_SIZE: usize = 64;
