//! Elliptic Curve Primitives
//!
//! This module provides the twisted Edwards form of Curve25519 used by the
//! Symbol and NEM key formats. Operations are written to take the same
//! sequence of steps whatever the secret inputs are.

pub mod ed25519;

pub use ed25519::{
    CompressedPoint as Ed25519CompressedPoint, EdwardsPoint as Ed25519Point,
    Scalar as Ed25519Scalar,
};
