//! AES-256-GCM with the tag appended to the ciphertext

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::{CryptoRng, RngCore};
use sharedkey_api::{Cipher, SharedKey256};
use sharedkey_params::utils::symmetric::{AES256_KEY_SIZE, AES_GCM_IV_SIZE, AES_GCM_TAG_SIZE};
use tracing::debug;

use crate::error::{from_aead_error, from_invalid_length, validate, Error, Result};

/// AES-256-GCM keyed by a shared key
#[derive(Clone)]
pub struct AesGcmCipher {
    key: SharedKey256,
}

impl AesGcmCipher {
    /// Byte size of the authentication tag
    pub const TAG_SIZE: usize = AES_GCM_TAG_SIZE;

    /// Creates a cipher around a shared key
    pub fn new(key: &SharedKey256) -> Self {
        Self { key: key.clone() }
    }

    /// Draws a fresh IV from a cryptographically secure RNG
    pub fn generate_iv<R: CryptoRng + RngCore>(rng: &mut R) -> [u8; AES_GCM_IV_SIZE] {
        let mut iv = [0u8; AES_GCM_IV_SIZE];
        rng.fill_bytes(&mut iv);
        iv
    }

    /// Encrypts under a fresh random IV and returns both
    pub fn encrypt_with_random_iv<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        clear_text: &[u8],
    ) -> Result<(Vec<u8>, [u8; AES_GCM_IV_SIZE])> {
        let iv = Self::generate_iv(rng);
        let cipher_text = self.encrypt(clear_text, &iv)?;
        Ok((cipher_text, iv))
    }

    fn cipher(&self) -> Result<Aes256Gcm> {
        Aes256Gcm::new_from_slice(self.key.as_bytes())
            .map_err(|_| from_invalid_length("AES-256-GCM key", AES256_KEY_SIZE, AES256_KEY_SIZE))
    }
}

impl Cipher for AesGcmCipher {
    const IV_SIZE: usize = AES_GCM_IV_SIZE;

    fn name() -> &'static str {
        "AES-256-GCM"
    }

    fn encrypt(&self, clear_text: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        validate::length("AES-256-GCM IV", iv.len(), AES_GCM_IV_SIZE)?;
        self.cipher()?
            .encrypt(Nonce::from_slice(iv), clear_text)
            .map_err(|_| Error::Other {
                context: "AES-256-GCM",
                message: "encryption failed".to_string(),
            })
    }

    fn decrypt(&self, cipher_text: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        validate::length("AES-256-GCM IV", iv.len(), AES_GCM_IV_SIZE)?;
        validate::min_length("AES-256-GCM cipher text", cipher_text.len(), Self::TAG_SIZE)?;
        self.cipher()?
            .decrypt(Nonce::from_slice(iv), cipher_text)
            .map_err(|_| {
                debug!(len = cipher_text.len(), "AES-256-GCM tag verification failed");
                from_aead_error("AES-256-GCM")
            })
    }
}
