//! Clamped scalars derived from private-key digests

use sharedkey_common::security::SecretBuffer;
use sharedkey_params::traditional::agreement::SCALAR_DIGEST_SIZE;
use sharedkey_params::traditional::ed25519::ED25519_SCALAR_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret multiplier for the Curve25519 ladder
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<ED25519_SCALAR_SIZE>);

impl Scalar {
    /// Build a scalar from the first half of a 64-byte private-key digest,
    /// clamped.
    pub fn from_digest(digest: &[u8; SCALAR_DIGEST_SIZE]) -> Self {
        let mut bytes = [0u8; ED25519_SCALAR_SIZE];
        bytes.copy_from_slice(&digest[..ED25519_SCALAR_SIZE]);
        Self::from_bytes_clamped(bytes)
    }

    /// Wrap 32 bytes as a scalar, clamping them.
    ///
    /// The caller's copy is not touched; the local one is wiped.
    pub fn from_bytes_clamped(mut bytes: [u8; ED25519_SCALAR_SIZE]) -> Self {
        clamp(&mut bytes);
        let scalar = Scalar(SecretBuffer::new(bytes));
        bytes.zeroize();
        scalar
    }

    /// Borrow the little-endian scalar bytes
    pub fn as_bytes(&self) -> &[u8; ED25519_SCALAR_SIZE] {
        self.0.as_array()
    }
}

/// Clear the three low bits, clear bit 255 and set bit 254.
///
/// The result is a multiple of the cofactor 8 in [2^254, 2^255).
pub fn clamp(bytes: &mut [u8; ED25519_SCALAR_SIZE]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}
