//! Cross-field validation of criteria values.
//!
//! Validation failures are user-facing text that blocks the apply action at
//! the caller; they never corrupt or reject the underlying criteria value,
//! which remains editable.

use thiserror::Error;

use crate::criteria::CeilingRange;

/// A ceiling range that violates a cross-field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CeilingError {
    #[error("minimum exceeds maximum")]
    MinExceedsMax,

    #[error("minimum must be non-negative")]
    NegativeMin,

    #[error("maximum must be non-negative")]
    NegativeMax,
}

/// Check ceiling bound ordering and non-negativity.
///
/// Individually absent bounds are always fine; the predicate engine never
/// re-checks these rules.
pub fn validate_ceiling(range: &CeilingRange) -> Option<CeilingError> {
    if let (Some(min), Some(max)) = (range.min, range.max)
        && min > max
    {
        return Some(CeilingError::MinExceedsMax);
    }
    if let Some(min) = range.min
        && min < 0.0
    {
        return Some(CeilingError::NegativeMin);
    }
    if let Some(max) = range.max
        && max < 0.0
    {
        return Some(CeilingError::NegativeMax);
    }
    None
}
