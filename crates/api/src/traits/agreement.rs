//! Trait definition for authenticated Diffie-Hellman key agreement

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Key agreement producing a symmetric key from a local private key and a
/// peer's compact public key.
///
/// # Security Requirements
/// - `derive_shared_key` must validate the peer key completely before any
///   arithmetic involving the private key takes place.
/// - Validation failures are terminal and must be reported, never replaced
///   by a default key.
/// - The raw Diffie-Hellman output must not be returned to the caller.
pub trait KeyAgreement {
    /// Private key type; wiped on drop.
    type PrivateKey: Zeroize + Clone;

    /// Compact public key type.
    type PublicKey: Clone;

    /// Derived symmetric key; wiped on drop.
    type SharedKey: Zeroize + Clone;

    /// Error reported when the peer key is rejected.
    type Error: Into<crate::Error> + fmt::Debug;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new key pair from the provided CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (Self::PublicKey, Self::PrivateKey);

    /// Derive the public key belonging to a private key.
    fn public_key(private_key: &Self::PrivateKey) -> Self::PublicKey;

    /// Derive the symmetric key shared with the owner of `other_public_key`.
    fn derive_shared_key(
        private_key: &Self::PrivateKey,
        other_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedKey, Self::Error>;
}
