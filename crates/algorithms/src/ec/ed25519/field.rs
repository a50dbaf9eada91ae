//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held as sixteen signed 64-bit limbs of 16 bits each. Limbs
//! are allowed to drift outside [0, 2^16) between operations; `carry`
//! brings them back and `to_bytes` fully reduces.

use sharedkey_internal::constant_time::{ct_eq, ct_mask, ct_ne_flag};
use sharedkey_params::traditional::ed25519::{ED25519_FIELD_ELEMENT_SIZE, ED25519_FIELD_LIMBS};
use zeroize::Zeroize;

type Limbs = [i64; ED25519_FIELD_LIMBS];

/// Element of GF(2^255 - 19)
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement(pub(crate) Limbs);

impl FieldElement {
    /// The additive identity
    pub const ZERO: Self = FieldElement([0; ED25519_FIELD_LIMBS]);

    /// The multiplicative identity
    pub const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Load from 32 little-endian bytes. Bit 255 is ignored.
    ///
    /// Values in [p, 2^255) are accepted and behave as their reduction;
    /// callers that need canonical input check it beforehand.
    pub fn from_bytes(bytes: &[u8; ED25519_FIELD_ELEMENT_SIZE]) -> Self {
        let mut limbs = [0i64; ED25519_FIELD_LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = bytes[2 * i] as i64 + ((bytes[2 * i + 1] as i64) << 8);
        }
        limbs[15] &= 0x7fff;
        FieldElement(limbs)
    }

    /// Fully reduce and serialize to 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; ED25519_FIELD_ELEMENT_SIZE] {
        let mut t = self.0;
        carry(&mut t);
        carry(&mut t);
        carry(&mut t);

        // Two rounds of conditional subtraction of p
        let mut m = [0i64; ED25519_FIELD_LIMBS];
        for _ in 0..2 {
            m[0] = t[0] - 0xffed;
            for i in 1..15 {
                m[i] = t[i] - 0xffff - ((m[i - 1] >> 16) & 1);
                m[i - 1] &= 0xffff;
            }
            m[15] = t[15] - 0x7fff - ((m[14] >> 16) & 1);
            let borrow = ((m[15] >> 16) & 1) as u8;
            m[14] &= 0xffff;
            swap_limbs(&mut t, &mut m, 1 - borrow);
        }

        let mut out = [0u8; ED25519_FIELD_ELEMENT_SIZE];
        for i in 0..ED25519_FIELD_LIMBS {
            out[2 * i] = (t[i] & 0xff) as u8;
            out[2 * i + 1] = ((t[i] >> 8) & 0xff) as u8;
        }
        t.zeroize();
        m.zeroize();
        out
    }

    /// Addition without carry propagation
    pub fn add(&self, other: &Self) -> Self {
        let mut out = [0i64; ED25519_FIELD_LIMBS];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.0[i] + other.0[i];
        }
        FieldElement(out)
    }

    /// Subtraction without carry propagation
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = [0i64; ED25519_FIELD_LIMBS];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.0[i] - other.0[i];
        }
        FieldElement(out)
    }

    /// Additive inverse
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Schoolbook multiplication with folding of the high half by 38
    pub fn mul(&self, other: &Self) -> Self {
        let mut t = [0i64; 2 * ED25519_FIELD_LIMBS - 1];
        for i in 0..ED25519_FIELD_LIMBS {
            for j in 0..ED25519_FIELD_LIMBS {
                t[i + j] += self.0[i] * other.0[j];
            }
        }
        // 2^256 = 38 mod p
        for i in 0..ED25519_FIELD_LIMBS - 1 {
            t[i] += 38 * t[i + ED25519_FIELD_LIMBS];
        }

        let mut out = [0i64; ED25519_FIELD_LIMBS];
        out.copy_from_slice(&t[..ED25519_FIELD_LIMBS]);
        carry(&mut out);
        carry(&mut out);
        t.zeroize();
        FieldElement(out)
    }

    /// Squaring
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse via Fermat: self^(p-2).
    ///
    /// The inverse of zero is zero.
    pub fn invert(&self) -> Self {
        let mut c = *self;
        for a in (0..=253).rev() {
            c = c.square();
            if a != 2 && a != 4 {
                c = c.mul(self);
            }
        }
        c
    }

    /// self^((p-5)/8), the core of the square root computation
    pub fn pow_p58(&self) -> Self {
        let mut c = *self;
        for a in (0..=250).rev() {
            c = c.square();
            if a != 1 {
                c = c.mul(self);
            }
        }
        c
    }

    /// Low bit of the canonical encoding
    pub fn parity(&self) -> u8 {
        self.to_bytes()[0] & 1
    }

    /// Returns 1 if the two elements differ after reduction, 0 otherwise
    pub fn ne_flag(&self, other: &Self) -> u8 {
        let a = self.to_bytes();
        let b = other.to_bytes();
        ct_ne_flag(&a, &b)
    }

    /// Returns true if this element reduces to zero
    pub fn is_zero(&self) -> bool {
        self.ne_flag(&Self::ZERO) == 0
    }

    /// Swap `a` and `b` when `bit` is 1, without branching on it
    pub fn conditional_swap(a: &mut Self, b: &mut Self, bit: u8) {
        swap_limbs(&mut a.0, &mut b.0, bit);
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.to_bytes(), other.to_bytes())
    }
}

impl Eq for FieldElement {}

/// Propagate carries so every limb is back in [0, 2^16), folding the top
/// carry into limb 0 with weight 38.
fn carry(o: &mut Limbs) {
    for i in 0..ED25519_FIELD_LIMBS {
        o[i] += 1 << 16;
        let c = o[i] >> 16;
        if i < ED25519_FIELD_LIMBS - 1 {
            o[i + 1] += c - 1;
        } else {
            o[0] += 38 * (c - 1);
        }
        o[i] -= c << 16;
    }
}

fn swap_limbs(p: &mut Limbs, q: &mut Limbs, bit: u8) {
    let mask = ct_mask(bit);
    for i in 0..ED25519_FIELD_LIMBS {
        let t = mask & (p[i] ^ q[i]);
        p[i] ^= t;
        q[i] ^= t;
    }
}
