//! Internal utilities for the sharedkey library
//!
//! Nothing in here is part of the public API surface; the helpers exist so
//! that every crate in the workspace reaches for the same constant-time
//! primitives.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
