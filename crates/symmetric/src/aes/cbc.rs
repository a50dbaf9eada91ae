//! AES-256-CBC with PKCS#7 padding

use ::aes::cipher::block_padding::Pkcs7;
use ::aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use ::aes::Aes256;
use sharedkey_api::{Cipher, SharedKey256};
use sharedkey_params::utils::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_CBC_IV_SIZE};
use zeroize::Zeroizing;

use crate::error::{from_invalid_length, from_unpad_error, validate, Error, Result};

type Aes256CbcEnc = ::cbc::Encryptor<Aes256>;
type Aes256CbcDec = ::cbc::Decryptor<Aes256>;

/// AES-256-CBC keyed by a shared key
#[derive(Clone)]
pub struct AesCbcCipher {
    key: SharedKey256,
}

impl AesCbcCipher {
    /// Creates a cipher around a shared key
    pub fn new(key: &SharedKey256) -> Self {
        Self { key: key.clone() }
    }
}

impl Cipher for AesCbcCipher {
    const IV_SIZE: usize = AES_CBC_IV_SIZE;

    fn name() -> &'static str {
        "AES-256-CBC"
    }

    fn encrypt(&self, clear_text: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        validate::length("AES-256-CBC IV", iv.len(), AES_CBC_IV_SIZE)?;
        let encryptor = Aes256CbcEnc::new_from_slices(self.key.as_bytes(), iv)
            .map_err(|_| from_invalid_length("AES-256-CBC key", AES256_KEY_SIZE, AES256_KEY_SIZE))?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(clear_text))
    }

    fn decrypt(&self, cipher_text: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        validate::length("AES-256-CBC IV", iv.len(), AES_CBC_IV_SIZE)?;
        if cipher_text.is_empty() || cipher_text.len() % AES_BLOCK_SIZE != 0 {
            return Err(Error::DecryptionFailed {
                context: "AES-256-CBC",
                message: "cipher text is not a whole number of blocks".to_string(),
            });
        }

        let decryptor = Aes256CbcDec::new_from_slices(self.key.as_bytes(), iv)
            .map_err(|_| from_invalid_length("AES-256-CBC key", AES256_KEY_SIZE, AES256_KEY_SIZE))?;
        let clear_text = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(cipher_text)
            .map(Zeroizing::new)
            .map_err(|_| from_unpad_error("AES-256-CBC"))?;
        Ok(clear_text.to_vec())
    }
}
