//! # sharedkey
//!
//! Authenticated Curve25519 shared-key derivation for Symbol and NEM keys,
//! with the AES ciphers that consume the derived key.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sharedkey = "0.3"
//! ```
//!
//! ```
//! use sharedkey::prelude::*;
//!
//! let alice = SymbolKeyPair::from_private_key(
//!     "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced".parse()?,
//! );
//! let bob_public: PublicKey =
//!     "4875fd2e32875d1bc6567745f1509f0f890a1bf8ee59fa74452fa4183a270e03".parse()?;
//!
//! let key = alice.derive_shared_key(&bob_public)?;
//! let cipher = AesGcmCipher::new(&key);
//! let sealed = cipher.encrypt(b"hello", &[0u8; 12])?;
//! assert_eq!(cipher.decrypt(&sealed, &[0u8; 12])?, b"hello");
//! # Ok::<(), sharedkey::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `agreement` (default): the validated key agreement
//! - `symmetric` (default): AES-256-CBC and AES-256-GCM
//! - `serde`: `Serialize`/`Deserialize` for public keys
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sharedkey-api`]: error type, key types and traits
//! - [`sharedkey-algorithms`]: Curve25519 arithmetic, hashes, HKDF
//! - [`sharedkey-agreement`]: the Symbol and NEM key agreement
//! - [`sharedkey-symmetric`]: AES ciphers

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use sharedkey_algorithms as algorithms;
pub use sharedkey_api as api;
pub use sharedkey_common as common;
pub use sharedkey_internal as internal;
pub use sharedkey_params as params;

// Feature-gated re-exports
#[cfg(feature = "agreement")]
pub use sharedkey_agreement as agreement;

#[cfg(feature = "symmetric")]
pub use sharedkey_symmetric as symmetric;

/// Common imports for sharedkey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and key types
    pub use crate::api::{Cipher, KeyAgreement, PrivateKey, PublicKey, SharedKey256};

    // Re-export security types
    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "agreement")]
    pub use crate::agreement::{
        AgreementParams, KeyAgreementError, KeyPair, Nem, NemKeyPair, NemSharedKey, SharedKey,
        Symbol, SymbolKeyPair, SymbolSharedKey,
    };

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{AesCbcCipher, AesGcmCipher};

    // Re-export rand for convenience
    #[cfg(feature = "agreement")]
    pub use rand::{CryptoRng, RngCore};
}
