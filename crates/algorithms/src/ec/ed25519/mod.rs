//! Curve25519 in twisted Edwards form
//!
//! The curve is -x² + y² = 1 + d·x²·y² over GF(2^255 - 19) with
//! d = -121665/121666. The full group has order 8·L; keys and shared points
//! are expected in the subgroup of prime order
//! L = 2^252 + 27742317777372353535851937790883648493.
//!
//! The field arithmetic uses sixteen 16-bit limbs, scalar multiplication is
//! a fixed 256-step ladder with masked swaps, and decoding reports
//! non-canonical encodings separately from off-curve ones.

mod field;
mod point;
mod scalar;

pub use field::FieldElement;
pub use point::{CompressedPoint, EdwardsPoint};
pub use scalar::{clamp, Scalar};
pub use sharedkey_params::traditional::ed25519::{
    ED25519_FIELD_ELEMENT_SIZE, ED25519_POINT_SIZE, ED25519_SCALAR_SIZE,
};

/// Get the standard base point B
pub fn base_point() -> EdwardsPoint {
    EdwardsPoint::base_point()
}

/// Scalar multiplication with the base point: scalar·B
pub fn scalar_mult_base(scalar: &Scalar) -> EdwardsPoint {
    EdwardsPoint::mul_base(scalar)
}

/// Scalar multiplication with an arbitrary point
pub fn scalar_mult(scalar: &Scalar, point: &EdwardsPoint) -> EdwardsPoint {
    point.mul(scalar)
}
