//! AES-256 cipher modes
//!
//! `AesCbcCipher` uses PKCS#7 padding and a 16-byte IV. `AesGcmCipher` uses
//! a 12-byte IV and appends its 16-byte tag to the ciphertext.

pub mod cbc;
pub mod gcm;

pub use self::cbc::AesCbcCipher;
pub use self::gcm::AesGcmCipher;
