//! Immutable tuples.
//!
//! ## Purpose
//!
//! This module provides the constant tuple kinds: [`ConstTuple`] (fixed
//! arity) and [`ConstVarTuple`] (variable arity). Once constructed, their
//! component values never change — unlike a read-only *view* of a mutable
//! tuple, which may change between successive reads.
//!
//! ## Design notes
//!
//! * **No write capability**: Neither kind implements `TupleWrite`.
//! * **No generative capability**: Neither kind implements `TupleFactory`,
//!   so holding one never allows minting derived instances through it;
//!   convert to a mutable kind first.
//! * **Sharing**: With no mutation path, both kinds are safe to share
//!   across threads without synchronization (auto `Send`/`Sync`).
//!
//! ## Invariants
//!
//! * Component values are fixed at construction for the lifetime of the
//!   value.
//!
//! ## Non-goals
//!
//! * No interior mutability, ever.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::array;
use num_traits::Float;

// Internal dependencies
use crate::access::TupleRead;
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;
use crate::tuples::dynamic::VarTuple;
use crate::tuples::fixed::FixedTuple;

// ============================================================================
// Constant Fixed-Arity Tuple
// ============================================================================

/// An immutable tuple of exactly `N` float components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstTuple<T, const N: usize> {
    components: [T; N],
}

/// An immutable tuple of exactly 2 float components.
pub type ConstTuple2<T> = ConstTuple<T, 2>;

/// An immutable tuple of exactly 3 float components.
pub type ConstTuple3<T> = ConstTuple<T, 3>;

/// An immutable tuple of exactly 4 float components.
pub type ConstTuple4<T> = ConstTuple<T, 4>;

impl<T: Float, const N: usize> ConstTuple<T, N> {
    /// Create a constant tuple from its component array.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Create a constant tuple from the first `N` values of a slice.
    ///
    /// The slice must supply at least `N` components.
    pub fn from_slice(values: &[T]) -> Result<Self, TupleError> {
        Validator::min_size(values.len(), N)?;
        Ok(Self {
            components: array::from_fn(|i| values[i]),
        })
    }

    /// Create a constant tuple from the first `N` components of another
    /// tuple, capturing its values at this moment.
    #[inline]
    pub fn from_tuple<O: TupleRead<T> + ?Sized>(other: &O) -> Result<Self, TupleError> {
        Self::from_slice(other.as_components())
    }

    /// Copy the components out as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Copy into a mutable fixed-arity tuple.
    #[inline]
    pub fn to_tuple(&self) -> FixedTuple<T, N> {
        FixedTuple::new(self.components)
    }
}

impl<T: Float, const N: usize> TupleRead<T> for ConstTuple<T, N> {
    #[inline]
    fn as_components(&self) -> &[T] {
        &self.components
    }
}

impl<T: Float, const N: usize> From<FixedTuple<T, N>> for ConstTuple<T, N> {
    #[inline]
    fn from(tuple: FixedTuple<T, N>) -> Self {
        Self::new(tuple.to_array())
    }
}

impl<T: Float, const N: usize> From<ConstTuple<T, N>> for FixedTuple<T, N> {
    #[inline]
    fn from(tuple: ConstTuple<T, N>) -> Self {
        tuple.to_tuple()
    }
}

// ============================================================================
// Constant Variable-Arity Tuple
// ============================================================================

/// An immutable tuple of a runtime-determined number of float components.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstVarTuple<T> {
    components: Box<[T]>,
}

impl<T: Float> ConstVarTuple<T> {
    /// Create a constant tuple by copying a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            components: values.to_vec().into_boxed_slice(),
        }
    }

    /// Create a constant tuple by taking ownership of a component vector.
    pub fn from_vec(components: Vec<T>) -> Self {
        Self {
            components: components.into_boxed_slice(),
        }
    }

    /// Create a constant tuple from another tuple, capturing its values at
    /// this moment.
    #[inline]
    pub fn from_tuple<O: TupleRead<T> + ?Sized>(other: &O) -> Self {
        Self::from_slice(other.as_components())
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the tuple has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Copy into a mutable variable-arity tuple.
    #[inline]
    pub fn to_tuple(&self) -> VarTuple<T> {
        VarTuple::from_slice(&self.components)
    }
}

impl<T: Float> TupleRead<T> for ConstVarTuple<T> {
    #[inline]
    fn as_components(&self) -> &[T] {
        &self.components
    }
}

impl<T: Float> From<VarTuple<T>> for ConstVarTuple<T> {
    #[inline]
    fn from(tuple: VarTuple<T>) -> Self {
        Self::from_vec(tuple.into())
    }
}

impl<T: Float> From<ConstVarTuple<T>> for VarTuple<T> {
    #[inline]
    fn from(tuple: ConstVarTuple<T>) -> Self {
        tuple.to_tuple()
    }
}
