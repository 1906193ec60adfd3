//! Componentwise combination of two tuples.
//!
//! ## Purpose
//!
//! This module provides the shared zip-style combinator behind the
//! componentwise binary operations (min, max) when the operand sizes are
//! only known at runtime.
//!
//! ## Design notes
//!
//! * **Exact sizes**: Combination requires equal component counts; there
//!   is no broadcasting.
//! * **Generic results**: Results build through [`TupleFactory`], so the
//!   combinator serves any destination kind.
//!
//! ## Non-goals
//!
//! * This module does not define the scalar combination functions; callers
//!   pass them in.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::access::{TupleFactory, TupleRead};
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;

// ============================================================================
// Zip Combinator
// ============================================================================

/// Build a new tuple where component `i` is `f(a[i], b[i])`.
///
/// Fails with [`TupleError::SizeMismatch`] unless the operand sizes agree.
pub fn zip_with<T, A, B, D, F>(a: &A, b: &B, f: F) -> Result<D, TupleError>
where
    T: Float,
    A: TupleRead<T> + ?Sized,
    B: TupleRead<T> + ?Sized,
    D: TupleFactory<T>,
    F: Fn(T, T) -> T,
{
    let left = a.as_components();
    let right = b.as_components();
    Validator::exact_size(right.len(), left.len())?;
    D::from_fn(left.len(), |i| f(left[i], right[i]))
}
