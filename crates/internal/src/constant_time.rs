//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the length check is allowed to short-circuit; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time inequality flag for two 32-byte strings
///
/// Returns 1 when the inputs differ and 0 when they are equal, as a plain
/// integer so callers can fold several flags together with bitwise OR.
pub fn ct_ne_flag(a: &[u8; 32], b: &[u8; 32]) -> u8 {
    (!a[..].ct_eq(&b[..])).unwrap_u8()
}

/// Constant-time mask generation for a 0/1 flag
///
/// Returns an all-1s mask if `bit` is 1, all-0s if it is 0.
pub fn ct_mask(bit: u8) -> i64 {
    0i64.wrapping_sub((bit & 1) as i64)
}
