//! Key value types with security guarantees
//!
//! `PrivateKey` and `SharedKey256` are wiped on drop and never print their
//! contents; `PublicKey` is plain wire data and round-trips through hex.

use core::fmt;
use core::str::FromStr;

use rand::{CryptoRng, RngCore};
use sharedkey_internal::constant_time::ct_eq;
use sharedkey_params::traditional::agreement::{
    PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SHARED_KEY_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

fn decode_hex<const N: usize>(context: &'static str, s: &str) -> Result<[u8; N]> {
    validate::length(context, s.len(), 2 * N)?;
    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out)?;
    Ok(out)
}

/// 32-byte private key, owned by the caller
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Wrap raw private key bytes
    pub fn new(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("PrivateKey", slice.len(), PRIVATE_KEY_SIZE)?;
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Draw a fresh private key from a cryptographically secure RNG
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for PrivateKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = decode_hex::<PRIVATE_KEY_SIZE>("PrivateKey hex", s)?;
        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// 32-byte compact public key: y coordinate with the parity of x in bit 255
///
/// Holding a `PublicKey` says nothing about its validity; it is checked when
/// it is used in an agreement.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wrap raw public key bytes
    pub fn new(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("PublicKey", slice.len(), PUBLIC_KEY_SIZE)?;
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copy out the raw bytes
    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for PublicKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_hex::<PUBLIC_KEY_SIZE>("PublicKey hex", s).map(Self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

/// 32-byte symmetric key produced by the key derivation step
///
/// This is the only artifact of an agreement that leaves the pipeline.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey256([u8; SHARED_KEY_SIZE]);

impl SharedKey256 {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; SHARED_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("SharedKey256", slice.len(), SHARED_KEY_SIZE)?;
        let mut bytes = [0u8; SHARED_KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8; SHARED_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedKey256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for SharedKey256 {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = decode_hex::<SHARED_KEY_SIZE>("SharedKey256 hex", s)?;
        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }
}

impl PartialEq for SharedKey256 {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for SharedKey256 {}

impl fmt::Debug for SharedKey256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedKey256([REDACTED])")
    }
}
