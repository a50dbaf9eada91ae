//! Validation utilities for key agreement

use super::{Error, Result};

/// Validate that a decoded point may be used in the agreement
///
/// Both conditions are evaluated by the caller before this is reached, so
/// the outcome does not depend on which of them failed.
pub fn point(in_subgroup: bool, is_neutral: bool) -> Result<()> {
    if !in_subgroup | is_neutral {
        return Err(Error::InvalidPoint);
    }
    Ok(())
}

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}
