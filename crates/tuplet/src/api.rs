//! High-level API for tuple construction and use.
//!
//! ## Purpose
//!
//! This module is the user-facing entry point: it re-exports the tuple
//! kinds, capability traits, error type, and rounding palette, and adds
//! free constructor shorthands for the common arities.
//!
//! ## Design notes
//!
//! * **Flat surface**: Everything a typical caller needs is importable
//!   from the crate prelude.
//! * **Shorthands**: `tuple2(x, y)` and friends read better at call sites
//!   than array-literal constructors.

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::access::{TupleFactory, TupleRead, TupleWrite};
pub use crate::math::predicates;
pub use crate::math::rounding::RoundingMethod;
pub use crate::primitives::errors::TupleError;
pub use crate::tuples::constant::{
    ConstTuple, ConstTuple2, ConstTuple3, ConstTuple4, ConstVarTuple,
};
pub use crate::tuples::dynamic::VarTuple;
pub use crate::tuples::fixed::{FixedTuple, Tuple2, Tuple3, Tuple4};

// ============================================================================
// Constructor Shorthands
// ============================================================================

/// Create a 2-component tuple from its components.
#[inline]
pub fn tuple2<T: Float>(x: T, y: T) -> Tuple2<T> {
    Tuple2::new([x, y])
}

/// Create a 3-component tuple from its components.
#[inline]
pub fn tuple3<T: Float>(x: T, y: T, z: T) -> Tuple3<T> {
    Tuple3::new([x, y, z])
}

/// Create a 4-component tuple from its components.
#[inline]
pub fn tuple4<T: Float>(x: T, y: T, z: T, w: T) -> Tuple4<T> {
    Tuple4::new([x, y, z, w])
}

/// Create a variable-arity tuple by copying a slice.
#[inline]
pub fn var_tuple<T: Float>(values: &[T]) -> VarTuple<T> {
    VarTuple::from_slice(values)
}
