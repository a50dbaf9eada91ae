//! Constants for symmetric encryption algorithms

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-CBC initialization vector size in bytes
pub const AES_CBC_IV_SIZE: usize = 16;

/// AES-GCM initialization vector size in bytes
pub const AES_GCM_IV_SIZE: usize = 12;

/// AES-GCM authentication tag size in bytes
pub const AES_GCM_TAG_SIZE: usize = 16;
