//! Scalar numeric predicates with optional tolerance.
//!
//! ## Purpose
//!
//! This module provides the scalar finite/zero/equality/comparison
//! predicates that every tuple-level query delegates to. It is the single
//! source of truth for numeric comparison semantics in this crate: no
//! tuple type reimplements comparison logic independently.
//!
//! ## Design notes
//!
//! * **IEEE preserved**: Exact equality keeps IEEE-754 semantics; NaN is
//!   never equal to NaN and tolerance checks never mask it.
//! * **Checked vs. raw**: Public tolerance-taking functions validate the
//!   tolerance once; crate-internal `*_unchecked` cores assume a validated
//!   tolerance so componentwise loops pay the check only once per call.
//! * **Total ordering**: `compare` falls back to the total-order
//!   convention for NaN (greater than every number, equal to itself) so
//!   callers always receive an `Ordering`.
//!
//! ## Invariants
//!
//! * `|a - b| <= tol` with `tol >= 0` is reflexive for finite `a`,
//!   symmetric, and monotonic in `tol`.
//! * All functions are pure and total apart from the tolerance precondition.
//!
//! ## Non-goals
//!
//! * This module does not iterate over tuples; componentwise conjunction
//!   lives in the access layer.
//! * This module does not provide ULP-based or relative comparison modes.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;

// ============================================================================
// Finiteness and Zero Checks
// ============================================================================

/// Returns `true` iff `x` is neither infinite nor NaN.
#[inline]
pub fn is_finite<T: Float>(x: T) -> bool {
    x.is_finite()
}

/// Returns `true` iff `x` is exactly zero.
///
/// Both IEEE zeros (`+0.0` and `-0.0`) compare equal to zero.
#[inline]
pub fn is_zero<T: Float>(x: T) -> bool {
    x == T::zero()
}

/// Returns `true` iff `|x| <= tolerance`.
///
/// Fails with [`TupleError::InvalidTolerance`] if `tolerance < 0`.
#[inline]
pub fn is_zero_within<T: Float>(x: T, tolerance: T) -> Result<bool, TupleError> {
    Validator::tolerance(tolerance)?;
    Ok(zero_within_unchecked(x, tolerance))
}

// ============================================================================
// Equality
// ============================================================================

/// Exact IEEE float equality.
///
/// NaN is never equal to anything, including itself.
#[inline]
pub fn eq_exact<T: Float>(a: T, b: T) -> bool {
    a == b
}

/// Returns `true` iff `|a - b| <= tolerance`.
///
/// Fails with [`TupleError::InvalidTolerance`] if `tolerance < 0`. With
/// `tolerance == 0` this degenerates to exact equality.
#[inline]
pub fn eq_within<T: Float>(a: T, b: T, tolerance: T) -> Result<bool, TupleError> {
    Validator::tolerance(tolerance)?;
    Ok(eq_within_unchecked(a, b, tolerance))
}

// ============================================================================
// Three-Way Comparison
// ============================================================================

/// Three-way comparison by float ordering.
///
/// Where `partial_cmp` is defined it is used directly. NaN operands order
/// by the total-order convention: NaN is greater than every number and
/// equal to another NaN, so the result is always defined.
#[inline]
pub fn compare<T: Float>(a: T, b: T) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // partial_cmp is defined when neither side is NaN
            (false, false) => Ordering::Equal,
        },
    }
}

/// Three-way comparison that treats values within `tolerance` as equal.
///
/// Returns `Ordering::Equal` when `|a - b| <= tolerance`, otherwise the
/// ordinary ordering of `a` and `b`. Fails with
/// [`TupleError::InvalidTolerance`] if `tolerance < 0`.
#[inline]
pub fn compare_within<T: Float>(a: T, b: T, tolerance: T) -> Result<Ordering, TupleError> {
    Validator::tolerance(tolerance)?;
    Ok(compare_within_unchecked(a, b, tolerance))
}

// ============================================================================
// Raw Cores (validated tolerance)
// ============================================================================

/// `|x| <= tolerance` without the tolerance check.
#[inline]
pub(crate) fn zero_within_unchecked<T: Float>(x: T, tolerance: T) -> bool {
    x.abs() <= tolerance
}

/// `|a - b| <= tolerance` without the tolerance check.
#[inline]
pub(crate) fn eq_within_unchecked<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// Tolerant three-way comparison without the tolerance check.
#[inline]
pub(crate) fn compare_within_unchecked<T: Float>(a: T, b: T, tolerance: T) -> Ordering {
    if eq_within_unchecked(a, b, tolerance) {
        Ordering::Equal
    } else {
        compare(a, b)
    }
}
