//! Testing utilities for the sharedkey library
//!
//! Holds the published test vectors shared by the integration and property
//! tests of this crate.

pub mod vectors;
