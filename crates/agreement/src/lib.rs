//! Authenticated Curve25519 key agreement
//!
//! A peer's 32-byte public key goes through a fixed pipeline before it is
//! allowed near a private key:
//!
//! 1. decode, rejecting non-canonical encodings and off-curve points;
//! 2. check membership of the prime-order subgroup and reject the identity;
//! 3. multiply by the clamped hash of the private key;
//! 4. run the packed result through HKDF-SHA256 with the profile's info string.
//!
//! Only the HKDF output leaves the crate. Profiles select the hash and info
//! string for the Symbol and NEM networks.
//!
//! ```
//! use sharedkey_agreement::{SymbolKeyPair, SymbolSharedKey};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! let alice = SymbolKeyPair::generate(&mut rng);
//! let bob = SymbolKeyPair::generate(&mut rng);
//!
//! let k1 = SymbolSharedKey::derive(alice.private_key(), bob.public_key()).unwrap();
//! let k2 = SymbolSharedKey::derive(bob.private_key(), alice.public_key()).unwrap();
//! assert_eq!(k1, k2);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod keypair;
pub mod params;
pub mod shared_key;

pub use error::{Error, KeyAgreementError, Result};
pub use keypair::{KeyPair, NemKeyPair, SymbolKeyPair};
pub use params::{AgreementParams, Nem, Symbol};
pub use shared_key::{NemSharedKey, SharedKey, SymbolSharedKey};

pub use sharedkey_api::{PrivateKey, PublicKey, SharedKey256};
