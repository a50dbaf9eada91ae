//! Sizes of the hash and cipher primitives used around the agreement

pub mod hash;
pub mod symmetric;
