//! Variable-arity tuples.
//!
//! ## Purpose
//!
//! This module provides [`VarTuple`], the tuple kind whose component count
//! is a runtime value backed by owned contiguous storage.
//!
//! ## Design notes
//!
//! * **Explicit resizing**: The size is fixed at construction and changes
//!   only through `resize`, `rearrange`, or `set_slice_resize` — never as
//!   a side effect of setting component values.
//! * **Runtime size checks**: Operations pairing two variable tuples
//!   validate sizes at runtime; pure comparisons report mismatches as
//!   `false`, mutating operations as errors.
//!
//! ## Invariants
//!
//! * Components live in one contiguous allocation.
//! * Resizing preserves the common prefix and zero-fills new trailing
//!   components.
//!
//! ## Non-goals
//!
//! * No small-size optimization; storage is always heap-backed.
//! * No linear-algebra operations beyond componentwise arithmetic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::access::{TupleFactory, TupleRead, TupleWrite};
use crate::engine::{combine, rearrange};
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;

// ============================================================================
// Variable-Arity Tuple
// ============================================================================

/// A tuple of a runtime-determined number of float components.
///
/// `Clone` produces an independent deep copy; mutating the copy never
/// affects the original.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VarTuple<T> {
    components: Vec<T>,
}

impl<T: Float> VarTuple<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a tuple with `size` zero components.
    pub fn zeros(size: usize) -> Self {
        Self {
            components: vec![T::zero(); size],
        }
    }

    /// Create a tuple by copying a slice; the size is the slice length.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            components: values.to_vec(),
        }
    }

    /// Create a tuple by taking ownership of a component vector.
    #[inline]
    pub fn from_vec(components: Vec<T>) -> Self {
        Self { components }
    }

    /// Create a tuple by copying the components of another tuple.
    #[inline]
    pub fn from_tuple<O: TupleRead<T> + ?Sized>(other: &O) -> Self {
        Self::from_slice(other.as_components())
    }

    // ========================================================================
    // Sizing
    // ========================================================================

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

    /// Resize in place to `new_size` components.
    ///
    /// Components `0..min(old, new)` are preserved; new trailing
    /// components are zero.
    pub fn resize(&mut self, new_size: usize) {
        self.components.resize(new_size, T::zero());
    }

    /// Build a new tuple of `new_size` components with the same prefix.
    pub fn resized(&self, new_size: usize) -> Self {
        let mut out = self.clone();
        out.resize(new_size);
        out
    }

    // ========================================================================
    // Rearrangement
    // ========================================================================

    /// Rearrange in place; the mapping length becomes the new size.
    ///
    /// Component `i` of the result is the old value at `mapping[i]`; the
    /// mapping may be shorter or longer than the current size. Fails with
    /// [`TupleError::IndexOutOfBounds`] if any index is `>= len()`; the
    /// tuple is untouched on failure.
    pub fn rearrange(&mut self, mapping: &[usize]) -> Result<(), TupleError> {
        let next: Self = rearrange::rearranged(self, mapping)?;
        *self = next;
        Ok(())
    }

    /// Build a new tuple where component `i` is the value at `mapping[i]`.
    ///
    /// The result size is the mapping length.
    #[inline]
    pub fn rearranged(&self, mapping: &[usize]) -> Result<Self, TupleError> {
        rearrange::rearranged(self, mapping)
    }

    /// Build a new tuple with the components at `a` and `b` exchanged.
    ///
    /// The in-place form is
    /// [`swap_components`](TupleWrite::swap_components).
    #[inline]
    pub fn swapped(&self, a: usize, b: usize) -> Result<Self, TupleError> {
        rearrange::swapped(self, a, b)
    }

    // ========================================================================
    // Bulk Assignment
    // ========================================================================

    /// Replace all components from a slice of exactly the current size.
    ///
    /// Fails with [`TupleError::SizeMismatch`] otherwise; assigning values
    /// never changes the size implicitly.
    pub fn set_slice(&mut self, values: &[T]) -> Result<(), TupleError> {
        Validator::exact_size(values.len(), self.components.len())?;
        self.components.copy_from_slice(values);
        Ok(())
    }

    /// Replace all components from a slice, adopting its length as the new
    /// size.
    pub fn set_slice_resize(&mut self, values: &[T]) {
        self.components.clear();
        self.components.extend_from_slice(values);
    }

    // ========================================================================
    // Componentwise Extrema
    // ========================================================================

    /// Componentwise minimum with another tuple of the same size.
    ///
    /// Fails with [`TupleError::SizeMismatch`] unless the sizes agree.
    #[inline]
    pub fn min(&self, other: &Self) -> Result<Self, TupleError> {
        combine::zip_with(self, other, |a, b| a.min(b))
    }

    /// Componentwise maximum with another tuple of the same size.
    ///
    /// Fails with [`TupleError::SizeMismatch`] unless the sizes agree.
    #[inline]
    pub fn max(&self, other: &Self) -> Result<Self, TupleError> {
        combine::zip_with(self, other, |a, b| a.max(b))
    }

    // ========================================================================
    // Componentwise Mapping
    // ========================================================================

    /// Build a new tuple with `f` applied to every component.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            components: self.components.iter().map(|&c| f(c)).collect(),
        }
    }

    /// Componentwise `floor`.
    #[inline]
    pub fn floor(&self) -> Self {
        self.map(Float::floor)
    }

    /// Componentwise `ceil`.
    #[inline]
    pub fn ceil(&self) -> Self {
        self.map(Float::ceil)
    }

    /// Componentwise round-half-away-from-zero.
    ///
    /// For other tie-breaking rules see [`round_with`](Self::round_with).
    #[inline]
    pub fn round(&self) -> Self {
        self.map(Float::round)
    }

    /// Componentwise truncation toward zero.
    #[inline]
    pub fn trunc(&self) -> Self {
        self.map(Float::trunc)
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        self.map(Float::abs)
    }

    /// Componentwise rounding under a caller-provided policy.
    ///
    /// Any `Fn(T) -> T` works; `RoundingMethod::apply` provides the common
    /// palette.
    #[inline]
    pub fn round_with<F: Fn(T) -> T>(&self, policy: F) -> Self {
        self.map(policy)
    }

    /// In-place componentwise `floor`.
    #[inline]
    pub fn floor_assign(&mut self) {
        self.map_assign(Float::floor);
    }

    /// In-place componentwise `ceil`.
    #[inline]
    pub fn ceil_assign(&mut self) {
        self.map_assign(Float::ceil);
    }

    /// In-place componentwise round-half-away-from-zero.
    #[inline]
    pub fn round_assign(&mut self) {
        self.map_assign(Float::round);
    }

    /// In-place componentwise truncation toward zero.
    #[inline]
    pub fn trunc_assign(&mut self) {
        self.map_assign(Float::trunc);
    }

    /// In-place componentwise absolute value.
    #[inline]
    pub fn abs_assign(&mut self) {
        self.map_assign(Float::abs);
    }

    /// In-place componentwise rounding under a caller-provided policy.
    #[inline]
    pub fn round_with_assign<F: Fn(T) -> T>(&mut self, policy: F) {
        self.map_assign(policy);
    }
}

// ============================================================================
// Capability Implementations
// ============================================================================

impl<T: Float> TupleRead<T> for VarTuple<T> {
    #[inline]
    fn as_components(&self) -> &[T] {
        &self.components
    }
}

impl<T: Float> TupleWrite<T> for VarTuple<T> {
    #[inline]
    fn as_components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }
}

impl<T: Float> TupleFactory<T> for VarTuple<T> {
    fn from_fn<F: FnMut(usize) -> T>(size: usize, fill: F) -> Result<Self, TupleError> {
        Ok(Self {
            components: (0..size).map(fill).collect(),
        })
    }
}

// ============================================================================
// Conversions and Std Traits
// ============================================================================

impl<T: Float> From<Vec<T>> for VarTuple<T> {
    #[inline]
    fn from(components: Vec<T>) -> Self {
        Self::from_vec(components)
    }
}

impl<T: Float> From<&[T]> for VarTuple<T> {
    #[inline]
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Float> From<VarTuple<T>> for Vec<T> {
    #[inline]
    fn from(tuple: VarTuple<T>) -> Self {
        tuple.components
    }
}

impl<T: Float> Index<usize> for VarTuple<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T: Float> IndexMut<usize> for VarTuple<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}
