//! Layer 3: Access
//!
//! # Purpose
//!
//! This layer defines the capability split every tuple kind is built on:
//! a read-only capability ([`TupleRead`]), a writable capability
//! ([`TupleWrite`]), and a separable generative capability
//! ([`TupleFactory`]) used by generic algorithms to build derived results
//! without knowing the concrete tuple kind.
//!
//! All componentwise predicates and comparisons live here as default
//! methods so every arity shares one implementation, and all of them
//! delegate to the scalar predicates in the math layer.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Tuples
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Access ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! # Invariants
//!
//! * A holder of `&impl TupleRead` can never observe itself causing
//!   mutation through that reference.
//! * Every index argument is validated against `[0, size)` before use.
//! * Size mismatches are errors on mutating paths and `false` on pure
//!   equality paths.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::math::predicates;
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;

// ============================================================================
// Read Capability
// ============================================================================

/// Read-only capability over an ordered sequence of float components.
///
/// Implementors only provide [`as_components`](TupleRead::as_components);
/// sizing, indexed access, copy-out conversions, and every predicate and
/// comparison come as shared default methods. The borrowed component view
/// observes the underlying tuple and may change between reads if someone
/// else holds the writable capability; for a tuple whose values can never
/// change, see the constant tuple kinds.
pub trait TupleRead<T: Float> {
    /// Borrow the components as a contiguous slice.
    fn as_components(&self) -> &[T];

    // ========================================================================
    // Sizing and Indexed Access
    // ========================================================================

    /// Number of components.
    #[inline]
    fn size(&self) -> usize {
        self.as_components().len()
    }

    /// Get the component at `index`.
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if `index >= size()`.
    #[inline]
    fn get(&self, index: usize) -> Result<T, TupleError> {
        let components = self.as_components();
        Validator::index(index, components.len())?;
        Ok(components[index])
    }

    // ========================================================================
    // Copy-Out Conversions
    // ========================================================================

    /// Copy the components into a freshly allocated vector.
    ///
    /// The result never aliases internal storage.
    #[inline]
    fn to_vec(&self) -> Vec<T> {
        self.as_components().to_vec()
    }

    /// Copy the components into the prefix of a caller-provided buffer.
    ///
    /// Fails with [`TupleError::BufferTooSmall`] if
    /// `buffer.len() < size()`. Components beyond the prefix are left
    /// untouched.
    fn write_into(&self, buffer: &mut [T]) -> Result<(), TupleError> {
        let components = self.as_components();
        Validator::buffer(buffer.len(), components.len())?;
        buffer[..components.len()].copy_from_slice(components);
        Ok(())
    }

    // ========================================================================
    // Componentwise Predicates
    // ========================================================================

    /// Returns `true` iff every component is finite.
    ///
    /// Short-circuits on the first non-finite component.
    #[inline]
    fn is_finite(&self) -> bool {
        self.as_components().iter().all(|&c| predicates::is_finite(c))
    }

    /// Returns `true` iff every component is exactly zero.
    #[inline]
    fn is_zero(&self) -> bool {
        self.as_components().iter().all(|&c| predicates::is_zero(c))
    }

    /// Returns `true` iff every component has magnitude at most `tolerance`.
    ///
    /// Fails with [`TupleError::InvalidTolerance`] if `tolerance < 0`.
    fn is_zero_within(&self, tolerance: T) -> Result<bool, TupleError> {
        Validator::tolerance(tolerance)?;
        Ok(self
            .as_components()
            .iter()
            .all(|&c| predicates::zero_within_unchecked(c, tolerance)))
    }

    // ========================================================================
    // Equality
    // ========================================================================

    /// Componentwise exact equality against another tuple.
    ///
    /// A size mismatch makes the tuples unequal; it is never an error.
    fn eq_tuple<O: TupleRead<T> + ?Sized>(&self, other: &O) -> bool {
        self.eq_slice(other.as_components())
    }

    /// Componentwise tolerant equality against another tuple.
    ///
    /// A size mismatch yields `Ok(false)`. Fails with
    /// [`TupleError::InvalidTolerance`] if `tolerance < 0` regardless of
    /// sizes.
    fn eq_tuple_within<O: TupleRead<T> + ?Sized>(
        &self,
        other: &O,
        tolerance: T,
    ) -> Result<bool, TupleError> {
        self.eq_slice_within(other.as_components(), tolerance)
    }

    /// Componentwise exact equality against a raw component slice.
    fn eq_slice(&self, other: &[T]) -> bool {
        let components = self.as_components();
        components.len() == other.len()
            && components
                .iter()
                .zip(other)
                .all(|(&a, &b)| predicates::eq_exact(a, b))
    }

    /// Componentwise tolerant equality against a raw component slice.
    fn eq_slice_within(&self, other: &[T], tolerance: T) -> Result<bool, TupleError> {
        Validator::tolerance(tolerance)?;
        let components = self.as_components();
        Ok(components.len() == other.len()
            && components
                .iter()
                .zip(other)
                .all(|(&a, &b)| predicates::eq_within_unchecked(a, b, tolerance)))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison of the component pair at `index`.
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if `index` is invalid
    /// for either tuple.
    fn compare_at<O: TupleRead<T> + ?Sized>(
        &self,
        index: usize,
        other: &O,
    ) -> Result<Ordering, TupleError> {
        let a = self.get(index)?;
        let b = other.get(index)?;
        Ok(predicates::compare(a, b))
    }

    /// Tolerant three-way comparison of the component pair at `index`.
    fn compare_at_within<O: TupleRead<T> + ?Sized>(
        &self,
        index: usize,
        other: &O,
        tolerance: T,
    ) -> Result<Ordering, TupleError> {
        Validator::tolerance(tolerance)?;
        let a = self.get(index)?;
        let b = other.get(index)?;
        Ok(predicates::compare_within_unchecked(a, b, tolerance))
    }
}

// ============================================================================
// Write Capability
// ============================================================================

/// Writable capability over an ordered sequence of float components.
///
/// Extends [`TupleRead`] with indexed mutation, bulk assignment, and
/// in-place component exchange. Setters accept any float, including NaN
/// and infinities: finiteness is a query, never an enforced invariant.
pub trait TupleWrite<T: Float>: TupleRead<T> {
    /// Borrow the components as a mutable contiguous slice.
    ///
    /// The slice length is the tuple size; implementations never expose a
    /// length-changing handle here, so writes through it cannot resize the
    /// tuple.
    fn as_components_mut(&mut self) -> &mut [T];

    // ========================================================================
    // Indexed and Bulk Mutation
    // ========================================================================

    /// Set the component at `index`.
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if `index >= size()`.
    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<(), TupleError> {
        let components = self.as_components_mut();
        Validator::index(index, components.len())?;
        components[index] = value;
        Ok(())
    }

    /// Set every component to `value`.
    #[inline]
    fn fill(&mut self, value: T) {
        for component in self.as_components_mut() {
            *component = value;
        }
    }

    /// Assign components from the prefix of a slice.
    ///
    /// The source must supply at least `size()` components; extra trailing
    /// values are ignored. Fails with
    /// [`TupleError::InsufficientComponents`] otherwise, without touching
    /// any component.
    fn set_from_slice(&mut self, values: &[T]) -> Result<(), TupleError> {
        let components = self.as_components_mut();
        Validator::min_size(values.len(), components.len())?;
        components.copy_from_slice(&values[..components.len()]);
        Ok(())
    }

    /// Assign components from another tuple.
    ///
    /// The source must supply at least `size()` components.
    #[inline]
    fn set_from_tuple<O: TupleRead<T> + ?Sized>(&mut self, other: &O) -> Result<(), TupleError> {
        self.set_from_slice(other.as_components())
    }

    // ========================================================================
    // Component Exchange
    // ========================================================================

    /// Swap the components at positions `a` and `b`.
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if either index is
    /// invalid; the tuple is untouched on failure.
    fn swap_components(&mut self, a: usize, b: usize) -> Result<(), TupleError> {
        let components = self.as_components_mut();
        Validator::index(a, components.len())?;
        Validator::index(b, components.len())?;
        components.swap(a, b);
        Ok(())
    }

    // ========================================================================
    // Componentwise Extrema
    // ========================================================================

    /// Replace each component with the minimum of itself and the
    /// corresponding component of `other`.
    ///
    /// Fails with [`TupleError::SizeMismatch`] unless the sizes agree.
    fn min_assign<O: TupleRead<T> + ?Sized>(&mut self, other: &O) -> Result<(), TupleError> {
        let source = other.as_components();
        let components = self.as_components_mut();
        Validator::exact_size(source.len(), components.len())?;
        for (dst, &src) in components.iter_mut().zip(source) {
            *dst = dst.min(src);
        }
        Ok(())
    }

    /// Replace each component with the maximum of itself and the
    /// corresponding component of `other`.
    ///
    /// Fails with [`TupleError::SizeMismatch`] unless the sizes agree.
    fn max_assign<O: TupleRead<T> + ?Sized>(&mut self, other: &O) -> Result<(), TupleError> {
        let source = other.as_components();
        let components = self.as_components_mut();
        Validator::exact_size(source.len(), components.len())?;
        for (dst, &src) in components.iter_mut().zip(source) {
            *dst = dst.max(src);
        }
        Ok(())
    }

    // ========================================================================
    // Componentwise Mapping
    // ========================================================================

    /// Replace each component with `f(component)`.
    #[inline]
    fn map_assign<F: Fn(T) -> T>(&mut self, f: F) {
        for component in self.as_components_mut() {
            *component = f(*component);
        }
    }
}

// ============================================================================
// Generative Capability
// ============================================================================

/// Capability to build a new tuple of a concrete kind.
///
/// Generic algorithms use this to construct derived results (rearranged,
/// resized, combined) without naming the concrete type. It is deliberately
/// separate from [`TupleRead`]: the constant tuple kinds implement reads
/// but withhold this capability, so holding one never allows minting
/// derived instances through it.
pub trait TupleFactory<T: Float>: TupleRead<T> + Sized {
    /// Build a tuple with `size` components, each produced by `fill`.
    ///
    /// Fixed-arity kinds fail with [`TupleError::SizeMismatch`] when
    /// `size` differs from their arity; variable-arity kinds accept any
    /// size.
    fn from_fn<F: FnMut(usize) -> T>(size: usize, fill: F) -> Result<Self, TupleError>;

    /// Build a tuple with `size` components, all equal to `value`.
    #[inline]
    fn filled(size: usize, value: T) -> Result<Self, TupleError> {
        Self::from_fn(size, |_| value)
    }

    /// Build a tuple with `size` zero components.
    #[inline]
    fn zeroed(size: usize) -> Result<Self, TupleError> {
        Self::filled(size, T::zero())
    }
}
