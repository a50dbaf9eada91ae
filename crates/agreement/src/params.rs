//! Protocol profiles
//!
//! A profile fixes the 512-bit hash applied to the private key, any
//! preprocessing of the key bytes before hashing, and the HKDF info string.
//! Profiles are zero-sized and selected by type.

use digest::consts::U64;
use digest::Digest;
use sharedkey_algorithms::ec::ed25519::Scalar;
use sharedkey_algorithms::hash::{digest_512, Keccak512, Sha512};
use sharedkey_api::PrivateKey;
use sharedkey_params::traditional::agreement::{NEM_HKDF_INFO, PRIVATE_KEY_SIZE, SYMBOL_HKDF_INFO};
use zeroize::Zeroizing;

/// Parameters of one key agreement profile
pub trait AgreementParams {
    /// Profile name, used in logs and as the algorithm name
    const NAME: &'static str;

    /// HKDF info string binding derived keys to the network
    const INFO: &'static [u8];

    /// Hash applied to the private key to obtain the scalar
    type Hasher: Digest<OutputSize = U64>;

    /// Bytes fed to `Hasher`; the private key as-is unless a profile says
    /// otherwise
    fn scalar_seed(private_key: &[u8; PRIVATE_KEY_SIZE]) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        Zeroizing::new(*private_key)
    }

    /// Hash the private key and clamp the low half of the digest.
    fn scalar(private_key: &PrivateKey) -> Scalar {
        let seed = Self::scalar_seed(private_key.as_bytes());
        let digest = digest_512::<Self::Hasher>(&seed[..]);
        Scalar::from_digest(&digest)
    }
}

/// Symbol: SHA-512, info `"catapult"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Symbol;

impl AgreementParams for Symbol {
    const NAME: &'static str = "Symbol";
    const INFO: &'static [u8] = SYMBOL_HKDF_INFO;
    type Hasher = Sha512;
}

/// NEM: Keccak-512 over the byte-reversed private key, info `"nem-nis1"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nem;

impl AgreementParams for Nem {
    const NAME: &'static str = "NEM";
    const INFO: &'static [u8] = NEM_HKDF_INFO;
    type Hasher = Keccak512;

    fn scalar_seed(private_key: &[u8; PRIVATE_KEY_SIZE]) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut seed = Zeroizing::new(*private_key);
        seed.reverse();
        seed
    }
}
