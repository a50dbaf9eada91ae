//! Shared key derivation
//!
//! `SharedKey<P>` runs the full pipeline for profile `P`. The raw
//! Diffie-Hellman output is held in a `SecretBuffer` that is wiped as soon as
//! HKDF has consumed it, on success and on every error path.

use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use sharedkey_algorithms::ec::ed25519::{CompressedPoint, EdwardsPoint};
use sharedkey_algorithms::kdf::HkdfSha256;
use sharedkey_api::{KeyAgreement, PrivateKey, PublicKey, SharedKey256};
use sharedkey_common::security::{SecretBuffer, ZeroizeGuard};
use sharedkey_params::traditional::agreement::{SHARED_KEY_SIZE, SHARED_SECRET_SIZE};
use tracing::{debug, trace};

use crate::error::{validate, Error, Result};
use crate::params::{AgreementParams, Nem, Symbol};

/// Key agreement for profile `P`
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedKey<P: AgreementParams>(PhantomData<P>);

/// Key agreement with Symbol keys
pub type SymbolSharedKey = SharedKey<Symbol>;

/// Key agreement with NEM keys
pub type NemSharedKey = SharedKey<Nem>;

impl<P: AgreementParams> SharedKey<P> {
    /// Decode a peer public key and check that it may be used.
    ///
    /// Returns the negation of the encoded point, which is the form the
    /// decoder produces; the subgroup test is insensitive to the sign.
    pub fn validate_public_key(public_key: &PublicKey) -> Result<EdwardsPoint> {
        let encoded = CompressedPoint::from_bytes(public_key.to_bytes());

        let negated = encoded.decompress_negated().map_err(|e| {
            debug!(profile = P::NAME, reason = %e, "rejected peer public key");
            Error::from(e)
        })?;
        trace!(profile = P::NAME, "peer public key decoded");

        let in_subgroup = negated.is_in_prime_order_subgroup();
        let is_neutral = negated.is_neutral();
        validate::point(in_subgroup, is_neutral).map_err(|e| {
            debug!(
                profile = P::NAME,
                reason = "not a prime-order point",
                "rejected peer public key"
            );
            e
        })?;
        trace!(profile = P::NAME, "peer public key validated");

        Ok(negated)
    }

    /// Compute the packed Diffie-Hellman point.
    ///
    /// The validated point is negated back to the encoded point before it is
    /// multiplied by the clamped hash of the private key.
    pub(crate) fn derive_shared_secret(
        private_key: &PrivateKey,
        public_key: &PublicKey,
    ) -> Result<SecretBuffer<SHARED_SECRET_SIZE>> {
        let mut validated = Self::validate_public_key(public_key)?;
        let validated = ZeroizeGuard::new(&mut validated);
        let mut point = validated.neg();
        let point = ZeroizeGuard::new(&mut point);

        let scalar = P::scalar(private_key);
        let mut shared_point = point.mul(&scalar);
        let shared_point = ZeroizeGuard::new(&mut shared_point);

        let secret = SecretBuffer::new(shared_point.compress().0);
        trace!(profile = P::NAME, "shared secret computed");

        Ok(secret)
    }

    /// Derive the symmetric key shared with the owner of `public_key`.
    pub fn derive(private_key: &PrivateKey, public_key: &PublicKey) -> Result<SharedKey256> {
        let secret = Self::derive_shared_secret(private_key, public_key)?;
        let okm = HkdfSha256::derive_array::<SHARED_KEY_SIZE>(None, secret.as_slice(), P::INFO)?;
        drop(secret);
        trace!(profile = P::NAME, "shared key derived");
        Ok(SharedKey256::new(*okm))
    }
}

impl<P: AgreementParams> KeyAgreement for SharedKey<P> {
    type PrivateKey = PrivateKey;
    type PublicKey = PublicKey;
    type SharedKey = SharedKey256;
    type Error = Error;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (Self::PublicKey, Self::PrivateKey) {
        let private_key = PrivateKey::random(rng);
        let public_key = Self::public_key(&private_key);
        (public_key, private_key)
    }

    fn public_key(private_key: &Self::PrivateKey) -> Self::PublicKey {
        crate::keypair::derive_public_key::<P>(private_key)
    }

    fn derive_shared_key(
        private_key: &Self::PrivateKey,
        other_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedKey> {
        Self::derive(private_key, other_public_key)
    }
}
