//! Precondition checks shared across tuple operations.
//!
//! ## Purpose
//!
//! This module centralizes the fail-fast precondition checks used
//! throughout the crate: index range validation, component-count
//! requirements, and tolerance sign checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Checks return at the first violation, before any mutation.
//! * **Efficiency**: All checks are O(1) except mapping validation, which is O(len).
//! * **Generics**: Tolerance checks are generic over `Float` types.
//!
//! ## Invariants
//!
//! * A passing check guarantees the corresponding operation cannot fail on
//!   that precondition.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp, wrap, or otherwise repair invalid arguments.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TupleError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for tuple preconditions.
///
/// Provides static methods returning `Result<(), TupleError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that `index` addresses a component of a tuple with `len` components.
    #[inline]
    pub fn index(index: usize, len: usize) -> Result<(), TupleError> {
        if index >= len {
            return Err(TupleError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    /// Validate that every index in `mapping` addresses a component of a
    /// tuple with `source_len` components.
    ///
    /// Runs before any write so a bad mapping never leaves a tuple
    /// partially rearranged.
    pub fn mapping(mapping: &[usize], source_len: usize) -> Result<(), TupleError> {
        for &index in mapping {
            Self::index(index, source_len)?;
        }
        Ok(())
    }

    /// Validate that a component count matches exactly.
    #[inline]
    pub fn exact_size(got: usize, expected: usize) -> Result<(), TupleError> {
        if got != expected {
            return Err(TupleError::SizeMismatch { got, expected });
        }
        Ok(())
    }

    /// Validate that a bulk-assignment source supplies at least `need` components.
    #[inline]
    pub fn min_size(got: usize, need: usize) -> Result<(), TupleError> {
        if got < need {
            return Err(TupleError::InsufficientComponents { got, need });
        }
        Ok(())
    }

    /// Validate that an output buffer can receive `need` components.
    #[inline]
    pub fn buffer(got: usize, need: usize) -> Result<(), TupleError> {
        if got < need {
            return Err(TupleError::BufferTooSmall { got, need });
        }
        Ok(())
    }

    /// Validate that a tolerance is non-negative.
    ///
    /// NaN tolerances are rejected as well: a NaN is not `>= 0`.
    #[inline]
    pub fn tolerance<T: Float>(tolerance: T) -> Result<(), TupleError> {
        if !(tolerance >= T::zero()) {
            return Err(TupleError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}
