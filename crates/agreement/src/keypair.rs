//! Key pairs for an agreement profile

use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use sharedkey_algorithms::ec::ed25519::EdwardsPoint;
use sharedkey_api::{PrivateKey, PublicKey, SharedKey256};

use crate::error::{validate, Result};
use crate::params::{AgreementParams, Nem, Symbol};
use crate::shared_key::SharedKey;

/// Compute the public key of `private_key` under profile `P`
pub(crate) fn derive_public_key<P: AgreementParams>(private_key: &PrivateKey) -> PublicKey {
    let scalar = P::scalar(private_key);
    PublicKey::new(EdwardsPoint::mul_base(&scalar).compress().0)
}

/// A private key together with its public key
#[derive(Clone)]
pub struct KeyPair<P: AgreementParams> {
    private_key: PrivateKey,
    public_key: PublicKey,
    _profile: PhantomData<P>,
}

/// Symbol key pair
pub type SymbolKeyPair = KeyPair<Symbol>;

/// NEM key pair
pub type NemKeyPair = KeyPair<Nem>;

impl<P: AgreementParams> KeyPair<P> {
    /// Build a key pair from a private key
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = derive_public_key::<P>(&private_key);
        KeyPair {
            private_key,
            public_key,
            _profile: PhantomData,
        }
    }

    /// Build a key pair from both halves, checking that they belong together
    pub fn from_parts(private_key: PrivateKey, public_key: PublicKey) -> Result<Self> {
        let expected = derive_public_key::<P>(&private_key);
        validate::key(
            expected == public_key,
            "key pair",
            "public key does not match private key",
        )?;
        Ok(KeyPair {
            private_key,
            public_key,
            _profile: PhantomData,
        })
    }

    /// Generate a fresh key pair
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self::from_private_key(PrivateKey::random(rng))
    }

    /// The private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Derive the key shared with the owner of `other_public_key`
    pub fn derive_shared_key(&self, other_public_key: &PublicKey) -> Result<SharedKey256> {
        SharedKey::<P>::derive(&self.private_key, other_public_key)
    }
}

impl<P: AgreementParams> fmt::Debug for KeyPair<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("profile", &P::NAME)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
