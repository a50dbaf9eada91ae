//! Hash functions used around the key agreement
//!
//! The implementations come from the RustCrypto `sha2` and `sha3` crates;
//! this module fixes the set in use and offers a zeroizing 512-bit digest
//! helper for hashing private keys.

use digest::consts::U64;
use digest::generic_array::GenericArray;
use digest::Digest;
use sharedkey_params::utils::hash::SHA512_OUTPUT_SIZE;
use zeroize::Zeroizing;

pub use sha2::{Sha256, Sha512};
pub use sha3::Keccak512;

/// Hash `data` with a 512-bit function, returning a buffer wiped on drop
pub fn digest_512<H>(data: &[u8]) -> Zeroizing<[u8; SHA512_OUTPUT_SIZE]>
where
    H: Digest<OutputSize = U64>,
{
    let mut hasher = H::new();
    hasher.update(data);
    let mut out = Zeroizing::new([0u8; SHA512_OUTPUT_SIZE]);
    // the digest is written in place and never exists outside `out`
    hasher.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    out
}
