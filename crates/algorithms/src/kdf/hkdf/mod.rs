//! HMAC-based Key Derivation Function (HKDF)
//!
//! This module implements HKDF as defined in RFC 5869 with SHA-256 as the
//! underlying hash, on top of the RustCrypto `hkdf` crate. Intermediate and
//! output keying material is returned in zeroizing buffers.

use crate::error::{validate, Error, Result};
use ::hkdf::Hkdf;
use sha2::Sha256;
use sharedkey_params::utils::hash::SHA256_OUTPUT_SIZE;
use zeroize::Zeroizing;

/// Largest output RFC 5869 allows: 255 blocks of the hash output
pub const MAX_OUTPUT_SIZE: usize = 255 * SHA256_OUTPUT_SIZE;

/// HKDF instantiated with SHA-256
pub struct HkdfSha256;

impl HkdfSha256 {
    /// Extract a pseudorandom key from input keying material.
    ///
    /// A missing salt is treated as a string of zero bytes of hash length.
    pub fn extract(salt: Option<&[u8]>, ikm: &[u8]) -> Zeroizing<[u8; SHA256_OUTPUT_SIZE]> {
        let (prk, _) = Hkdf::<Sha256>::extract(salt, ikm);
        let mut out = Zeroizing::new([0u8; SHA256_OUTPUT_SIZE]);
        out.copy_from_slice(&prk);
        out
    }

    /// Expand a pseudorandom key into `length` bytes of output keying material.
    pub fn expand(prk: &[u8], info: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>> {
        validate::max_length("HKDF output", length, MAX_OUTPUT_SIZE)?;
        let hk = Hkdf::<Sha256>::from_prk(prk).map_err(|_| Error::Length {
            context: "HKDF PRK",
            expected: SHA256_OUTPUT_SIZE,
            actual: prk.len(),
        })?;

        let mut okm = Zeroizing::new(vec![0u8; length]);
        hk.expand(info, &mut okm[..]).map_err(|_| Error::Processing {
            operation: "HKDF expand",
            details: "output length rejected",
        })?;
        Ok(okm)
    }

    /// Extract and expand in one step.
    pub fn derive(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Self::extract(salt, ikm);
        Self::expand(&prk[..], info, length)
    }

    /// Derive exactly `N` bytes into a fixed-size buffer.
    pub fn derive_array<const N: usize>(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: &[u8],
    ) -> Result<Zeroizing<[u8; N]>> {
        validate::max_length("HKDF output", N, MAX_OUTPUT_SIZE)?;
        let hk = Hkdf::<Sha256>::new(salt, ikm);
        let mut okm = Zeroizing::new([0u8; N]);
        hk.expand(info, &mut okm[..]).map_err(|_| Error::Processing {
            operation: "HKDF expand",
            details: "output length rejected",
        })?;
        Ok(okm)
    }
}
