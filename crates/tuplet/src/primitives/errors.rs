//! Error types for tuple operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while accessing,
//! mutating, or rearranging tuples, including index range violations,
//! component-count mismatches, and tolerance preconditions.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Fail-fast**: Mutating operations validate before touching any component.
//! * **No-std**: Works without the standard library; no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Index errors**: Component or mapping indices outside `[0, size)`.
//! 2. **Size errors**: Operations requiring equal or sufficient component counts.
//! 3. **Tolerance errors**: Fuzzy predicates reject negative tolerances.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Pure equality paths report size mismatches as `false`, never as an error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for tuple operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TupleError {
    /// Component or mapping index outside the valid `[0, size)` range.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Number of components in the tuple.
        len: usize,
    },

    /// Operation requires an exact component count that was not met.
    SizeMismatch {
        /// Number of components provided.
        got: usize,
        /// Number of components required.
        expected: usize,
    },

    /// Bulk assignment source supplies fewer components than the target holds.
    InsufficientComponents {
        /// Number of components provided.
        got: usize,
        /// Minimum number of components required.
        need: usize,
    },

    /// Caller-provided output buffer is too small to receive all components.
    BufferTooSmall {
        /// Length of the buffer provided.
        got: usize,
        /// Minimum buffer length required.
        need: usize,
    },

    /// Fuzzy predicates require a non-negative tolerance.
    InvalidTolerance(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TupleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {index} (size is {len})")
            }
            Self::SizeMismatch { got, expected } => {
                write!(f, "Size mismatch: got {got} components, expected {expected}")
            }
            Self::InsufficientComponents { got, need } => {
                write!(
                    f,
                    "Insufficient components: got {got}, need at least {need}"
                )
            }
            Self::BufferTooSmall { got, need } => {
                write!(f, "Buffer too small: length {got}, need at least {need}")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be >= 0)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for TupleError {}
