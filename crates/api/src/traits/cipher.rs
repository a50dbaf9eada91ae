//! Trait for ciphers keyed by a derived shared key

use crate::Result;

/// Symmetric cipher operating on whole messages with a caller-supplied IV.
pub trait Cipher {
    /// Required initialization vector size in bytes.
    const IV_SIZE: usize;

    /// Returns the cipher name.
    fn name() -> &'static str;

    /// Encrypts `clear_text` under `iv`.
    fn encrypt(&self, clear_text: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `cipher_text` under `iv`.
    fn decrypt(&self, cipher_text: &[u8], iv: &[u8]) -> Result<Vec<u8>>;
}
