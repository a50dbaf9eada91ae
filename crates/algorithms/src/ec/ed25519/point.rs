//! Edwards curve points in extended coordinates
//!
//! A point (x, y) is held as (X : Y : Z : T) with x = X/Z, y = Y/Z and
//! T = XY/Z. The unified addition law covers doubling and the identity, so
//! the ladder in `mul_bytes` needs no special cases.

use crate::ec::ed25519::field::FieldElement;
use crate::ec::ed25519::scalar::Scalar;
use crate::error::DecodeError;
use sharedkey_params::traditional::ed25519::{
    BASE_X, BASE_Y, CANONICAL_LOW_BYTE_BOUND, D, D2, ED25519_POINT_SIZE, GROUP_ORDER, SQRT_M1,
};
use zeroize::Zeroize;

/// A 32-byte point encoding: little-endian y with the parity of x in bit 255
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompressedPoint(pub [u8; ED25519_POINT_SIZE]);

/// A point on the twisted Edwards curve -x² + y² = 1 + d·x²·y²
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl CompressedPoint {
    /// Wrap raw encoded bytes
    pub fn from_bytes(bytes: [u8; ED25519_POINT_SIZE]) -> Self {
        CompressedPoint(bytes)
    }

    /// Borrow the encoded bytes
    pub fn as_bytes(&self) -> &[u8; ED25519_POINT_SIZE] {
        &self.0
    }

    /// Returns true unless the encoded y coordinate is in [p, 2^255).
    ///
    /// The sign bit is ignored. The test folds every byte into a flag with
    /// arithmetic shifts instead of comparing and returning early.
    pub fn is_canonical(&self) -> bool {
        let b = &self.0;

        // a == 0 exactly when bytes 1..=31 are saturated (ignoring bit 255)
        let mut a = ((b[31] & 0x7f) ^ 0x7f) as i32;
        for &byte in b[1..31].iter().rev() {
            a |= (byte ^ 0xff) as i32;
        }
        let high_saturated = (a - 1) >> 8;

        // negative exactly when b[0] >= 0xED
        let low_overflow = (CANONICAL_LOW_BYTE_BOUND as i32 - 1 - b[0] as i32) >> 8;

        (high_saturated & low_overflow & 1) == 0
    }

    /// Decode to the negation of the encoded point.
    ///
    /// This is the form the validation pipeline works on: subgroup
    /// membership is the same for a point and its negation, and the caller
    /// negates back before multiplying. Fails if the encoding is not
    /// canonical or no x coordinate exists for the given y.
    pub fn decompress_negated(&self) -> Result<EdwardsPoint, DecodeError> {
        if !self.is_canonical() {
            return Err(DecodeError::NonCanonicalEncoding);
        }

        let d = FieldElement::from_bytes(&D);
        let y = FieldElement::from_bytes(&self.0);

        // x² = (y² - 1) / (d·y² + 1)
        let y2 = y.square();
        let num = y2.sub(&FieldElement::ONE);
        let den = y2.mul(&d).add(&FieldElement::ONE);

        // candidate x = num·den³·(num·den⁷)^((p-5)/8)
        let den2 = den.square();
        let den4 = den2.square();
        let den6 = den4.mul(&den2);
        let t = den6.mul(&num).mul(&den);
        let mut x = t.pow_p58().mul(&num).mul(&den).mul(&den).mul(&den);

        // If x² = -num/den the root is off by a factor of sqrt(-1)
        let mut x_rotated = x.mul(&FieldElement::from_bytes(&SQRT_M1));
        let wrong_root = x.square().mul(&den).ne_flag(&num);
        FieldElement::conditional_swap(&mut x, &mut x_rotated, wrong_root);

        if x.square().mul(&den).ne_flag(&num) != 0 {
            return Err(DecodeError::NotOnCurve);
        }

        // Pick the root whose parity differs from the sign bit, giving -P
        let mut neg_x = x.negate();
        let same_parity = 1 ^ (x.parity() ^ (self.0[31] >> 7));
        FieldElement::conditional_swap(&mut x, &mut neg_x, same_parity);

        Ok(EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x.mul(&y),
        })
    }

    /// Decode the encoded point.
    pub fn decompress(&self) -> Result<EdwardsPoint, DecodeError> {
        self.decompress_negated().map(|p| p.neg())
    }
}

impl From<[u8; ED25519_POINT_SIZE]> for CompressedPoint {
    fn from(bytes: [u8; ED25519_POINT_SIZE]) -> Self {
        CompressedPoint(bytes)
    }
}

impl EdwardsPoint {
    /// The neutral element (0, 1)
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    /// The standard base point B
    pub fn base_point() -> Self {
        let x = FieldElement::from_bytes(&BASE_X);
        let y = FieldElement::from_bytes(&BASE_Y);
        EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x.mul(&y),
        }
    }

    /// Point negation: (x, y) -> (-x, y)
    pub fn neg(&self) -> Self {
        EdwardsPoint {
            x: self.x.negate(),
            y: self.y,
            z: self.z,
            t: self.t.negate(),
        }
    }

    /// Unified point addition in extended coordinates
    pub fn add(&self, other: &Self) -> Self {
        let d2 = FieldElement::from_bytes(&D2);

        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.x.add(&self.y).mul(&other.x.add(&other.y));
        let c = self.t.mul(&other.t).mul(&d2);
        let d = self.z.mul(&other.z);
        let d = d.add(&d);

        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        EdwardsPoint {
            x: e.mul(&f),
            y: h.mul(&g),
            z: g.mul(&f),
            t: e.mul(&h),
        }
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Swap two points when `bit` is 1, without branching on it
    pub fn conditional_swap(p: &mut Self, q: &mut Self, bit: u8) {
        FieldElement::conditional_swap(&mut p.x, &mut q.x, bit);
        FieldElement::conditional_swap(&mut p.y, &mut q.y, bit);
        FieldElement::conditional_swap(&mut p.z, &mut q.z, bit);
        FieldElement::conditional_swap(&mut p.t, &mut q.t, bit);
    }

    /// Multiply by a little-endian 256-bit integer.
    ///
    /// Every bit from 255 down to 0 costs one swap, one addition, one
    /// doubling and one swap back, whatever its value.
    pub fn mul_bytes(&self, k: &[u8; 32]) -> Self {
        let mut p = Self::identity();
        let mut q = *self;
        for i in (0..256).rev() {
            let bit = (k[i / 8] >> (i & 7)) & 1;
            Self::conditional_swap(&mut p, &mut q, bit);
            q = q.add(&p);
            p = p.add(&p);
            Self::conditional_swap(&mut p, &mut q, bit);
        }
        q.zeroize();
        p
    }

    /// Multiply by a scalar
    pub fn mul(&self, scalar: &Scalar) -> Self {
        self.mul_bytes(scalar.as_bytes())
    }

    /// Multiply the base point by a scalar
    pub fn mul_base(scalar: &Scalar) -> Self {
        Self::base_point().mul(scalar)
    }

    /// Returns true if L·P is the identity, i.e. P lies in the prime-order
    /// subgroup.
    ///
    /// Both flags are combined before the single comparison, so the result
    /// does not reveal which coordinate check failed.
    pub fn is_in_prime_order_subgroup(&self) -> bool {
        let r = self.mul_bytes(&GROUP_ORDER);
        let coord_mismatch_flag = r.y.ne_flag(&r.z);
        let nonzero_flag = r.x.ne_flag(&FieldElement::ZERO);
        (coord_mismatch_flag | nonzero_flag) == 0
    }

    /// Returns true for the neutral element
    pub fn is_neutral(&self) -> bool {
        let coord_mismatch_flag = self.y.ne_flag(&self.z);
        let nonzero_flag = self.x.ne_flag(&FieldElement::ZERO);
        (coord_mismatch_flag | nonzero_flag) == 0
    }

    /// Encode as y with the parity of x in the top bit
    pub fn compress(&self) -> CompressedPoint {
        let z_inv = self.z.invert();
        let x = self.x.mul(&z_inv);
        let y = self.y.mul(&z_inv);
        let mut out = y.to_bytes();
        out[31] ^= x.parity() << 7;
        CompressedPoint(out)
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        // X1·Z2 = X2·Z1 and Y1·Z2 = Y2·Z1
        self.x.mul(&other.z) == other.x.mul(&self.z) && self.y.mul(&other.z) == other.y.mul(&self.z)
    }
}

impl Eq for EdwardsPoint {}
