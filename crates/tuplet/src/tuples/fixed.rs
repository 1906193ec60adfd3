//! Fixed-arity tuples.
//!
//! ## Purpose
//!
//! This module provides [`FixedTuple`], the tuple kind whose arity is a
//! type-level constant, together with the [`Tuple2`]/[`Tuple3`]/[`Tuple4`]
//! aliases and their positional accessors and pair-swap shorthands.
//!
//! ## Design notes
//!
//! * **One generic type**: All arities share a single implementation over
//!   `[T; N]`; the per-arity surface is a thin layer of named accessors
//!   over indexed access.
//! * **Compile-time mappings**: Inherent `arrange`/`arranged` take
//!   `[usize; N]`, so a wrong-length mapping is a compile error rather
//!   than a runtime check.
//! * **Same-arity extrema**: `min`/`max` against another tuple of the same
//!   alias need no size check, so they return `Self` directly.
//!
//! ## Invariants
//!
//! * Arity never changes after construction.
//! * Setters accept any float; finiteness is a query, not an invariant.
//!
//! ## Non-goals
//!
//! * No dot/cross products or other linear-algebra operations.
//! * No arity other than what `N` states; resizing belongs to the
//!   variable-arity kind.

// External dependencies
use core::array;
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::access::{TupleFactory, TupleRead, TupleWrite};
use crate::engine::rearrange;
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;

// ============================================================================
// Fixed-Arity Tuple
// ============================================================================

/// A tuple of exactly `N` float components.
///
/// `Clone`/`Copy` produce independent deep copies; mutating a copy never
/// affects the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTuple<T, const N: usize> {
    components: [T; N],
}

/// A tuple of exactly 2 float components.
pub type Tuple2<T> = FixedTuple<T, 2>;

/// A tuple of exactly 3 float components.
pub type Tuple3<T> = FixedTuple<T, 3>;

/// A tuple of exactly 4 float components.
pub type Tuple4<T> = FixedTuple<T, 4>;

impl<T: Float, const N: usize> FixedTuple<T, N> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a tuple from its component array.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Create a tuple with every component equal to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self {
            components: [value; N],
        }
    }

    /// Create a tuple with all components zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Create a tuple from the first `N` values of a slice.
    ///
    /// The slice must supply at least `N` components; extra trailing
    /// values are ignored. Fails with
    /// [`TupleError::InsufficientComponents`] otherwise.
    pub fn from_slice(values: &[T]) -> Result<Self, TupleError> {
        Validator::min_size(values.len(), N)?;
        Ok(Self {
            components: array::from_fn(|i| values[i]),
        })
    }

    /// Create a tuple from the first `N` components of another tuple.
    ///
    /// The source must supply at least `N` components.
    #[inline]
    pub fn from_tuple<O: TupleRead<T> + ?Sized>(other: &O) -> Result<Self, TupleError> {
        Self::from_slice(other.as_components())
    }

    // ========================================================================
    // Array Conversion
    // ========================================================================

    /// Copy the components out as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Replace all components from an array.
    #[inline]
    pub fn set_array(&mut self, components: [T; N]) {
        self.components = components;
    }

    // ========================================================================
    // Rearrangement
    // ========================================================================

    /// Rearrange in place: component `i` takes the old value at
    /// `mapping[i]`.
    ///
    /// Indices may repeat and need not all be used. Fails with
    /// [`TupleError::IndexOutOfBounds`] if any index is `>= N`; the tuple
    /// is untouched on failure.
    #[inline]
    pub fn arrange(&mut self, mapping: [usize; N]) -> Result<(), TupleError> {
        rearrange::arrange_in_place(self, &mapping)
    }

    /// Build a new tuple where component `i` is the value at `mapping[i]`.
    #[inline]
    pub fn arranged(&self, mapping: [usize; N]) -> Result<Self, TupleError> {
        rearrange::rearranged(self, &mapping)
    }

    /// Build a new tuple with the components at `a` and `b` exchanged.
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if either position is
    /// invalid. The in-place form is
    /// [`swap_components`](TupleWrite::swap_components).
    #[inline]
    pub fn swapped(&self, a: usize, b: usize) -> Result<Self, TupleError> {
        rearrange::swapped(self, a, b)
    }

    // ========================================================================
    // Componentwise Extrema
    // ========================================================================

    /// Componentwise minimum with another tuple of the same arity.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self {
            components: array::from_fn(|i| self.components[i].min(other.components[i])),
        }
    }

    /// Componentwise maximum with another tuple of the same arity.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self {
            components: array::from_fn(|i| self.components[i].max(other.components[i])),
        }
    }

    // ========================================================================
    // Componentwise Mapping
    // ========================================================================

    /// Build a new tuple with `f` applied to every component.
    #[inline]
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            components: self.components.map(f),
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
// Positional Accessors (arity 2)
// ============================================================================

impl<T: Float> FixedTuple<T, 2> {
    /// First component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Set the first component.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        self.components[0] = value;
    }

    /// Set the second component.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        self.components[1] = value;
    }

    /// Swap the first and second components in place.
    #[inline]
    pub fn swap_xy(&mut self) {
        self.components.swap(0, 1);
    }

    /// New tuple with the first and second components exchanged.
    #[inline]
    pub fn swapped_xy(&self) -> Self {
        let mut out = *self;
        out.swap_xy();
        out
    }
}

// ============================================================================
// Positional Accessors (arity 3)
// ============================================================================

impl<T: Float> FixedTuple<T, 3> {
    /// First component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Set the first component.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        self.components[0] = value;
    }

    /// Set the second component.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        self.components[1] = value;
    }

    /// Set the third component.
    #[inline]
    pub fn set_z(&mut self, value: T) {
        self.components[2] = value;
    }

    /// Swap the first and second components in place.
    #[inline]
    pub fn swap_xy(&mut self) {
        self.components.swap(0, 1);
    }

    /// Swap the first and third components in place.
    #[inline]
    pub fn swap_xz(&mut self) {
        self.components.swap(0, 2);
    }

    /// Swap the second and third components in place.
    #[inline]
    pub fn swap_yz(&mut self) {
        self.components.swap(1, 2);
    }

    /// New tuple with the first and second components exchanged.
    #[inline]
    pub fn swapped_xy(&self) -> Self {
        let mut out = *self;
        out.swap_xy();
        out
    }

    /// New tuple with the first and third components exchanged.
    #[inline]
    pub fn swapped_xz(&self) -> Self {
        let mut out = *self;
        out.swap_xz();
        out
    }

    /// New tuple with the second and third components exchanged.
    #[inline]
    pub fn swapped_yz(&self) -> Self {
        let mut out = *self;
        out.swap_yz();
        out
    }
}

// ============================================================================
// Positional Accessors (arity 4)
// ============================================================================

impl<T: Float> FixedTuple<T, 4> {
    /// First component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Fourth component.
    #[inline]
    pub fn w(&self) -> T {
        self.components[3]
    }

    /// Set the first component.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        self.components[0] = value;
    }

    /// Set the second component.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        self.components[1] = value;
    }

    /// Set the third component.
    #[inline]
    pub fn set_z(&mut self, value: T) {
        self.components[2] = value;
    }

    /// Set the fourth component.
    #[inline]
    pub fn set_w(&mut self, value: T) {
        self.components[3] = value;
    }

    /// Swap the first and second components in place.
    #[inline]
    pub fn swap_xy(&mut self) {
        self.components.swap(0, 1);
    }

    /// Swap the first and third components in place.
    #[inline]
    pub fn swap_xz(&mut self) {
        self.components.swap(0, 2);
    }

    /// Swap the first and fourth components in place.
    #[inline]
    pub fn swap_xw(&mut self) {
        self.components.swap(0, 3);
    }

    /// Swap the second and third components in place.
    #[inline]
    pub fn swap_yz(&mut self) {
        self.components.swap(1, 2);
    }

    /// Swap the second and fourth components in place.
    #[inline]
    pub fn swap_yw(&mut self) {
        self.components.swap(1, 3);
    }

    /// Swap the third and fourth components in place.
    #[inline]
    pub fn swap_zw(&mut self) {
        self.components.swap(2, 3);
    }

    /// New tuple with the first and second components exchanged.
    #[inline]
    pub fn swapped_xy(&self) -> Self {
        let mut out = *self;
        out.swap_xy();
        out
    }

    /// New tuple with the first and third components exchanged.
    #[inline]
    pub fn swapped_xz(&self) -> Self {
        let mut out = *self;
        out.swap_xz();
        out
    }

    /// New tuple with the first and fourth components exchanged.
    #[inline]
    pub fn swapped_xw(&self) -> Self {
        let mut out = *self;
        out.swap_xw();
        out
    }

    /// New tuple with the second and third components exchanged.
    #[inline]
    pub fn swapped_yz(&self) -> Self {
        let mut out = *self;
        out.swap_yz();
        out
    }

    /// New tuple with the second and fourth components exchanged.
    #[inline]
    pub fn swapped_yw(&self) -> Self {
        let mut out = *self;
        out.swap_yw();
        out
    }

    /// New tuple with the third and fourth components exchanged.
    #[inline]
    pub fn swapped_zw(&self) -> Self {
        let mut out = *self;
        out.swap_zw();
        out
    }
}

// ============================================================================
// Capability Implementations
// ============================================================================

impl<T: Float, const N: usize> TupleRead<T> for FixedTuple<T, N> {
    #[inline]
    fn as_components(&self) -> &[T] {
        &self.components
    }
}

impl<T: Float, const N: usize> TupleWrite<T> for FixedTuple<T, N> {
    #[inline]
    fn as_components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }
}

impl<T: Float, const N: usize> TupleFactory<T> for FixedTuple<T, N> {
    fn from_fn<F: FnMut(usize) -> T>(size: usize, mut fill: F) -> Result<Self, TupleError> {
        Validator::exact_size(size, N)?;
        Ok(Self {
            components: array::from_fn(|i| fill(i)),
        })
    }
}

// ============================================================================
// Conversions and Std Traits
// ============================================================================

impl<T: Float, const N: usize> Default for FixedTuple<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Float, const N: usize> From<[T; N]> for FixedTuple<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Float, const N: usize> From<FixedTuple<T, N>> for [T; N] {
    #[inline]
    fn from(tuple: FixedTuple<T, N>) -> Self {
        tuple.components
    }
}

impl<T: Float, const N: usize> Index<usize> for FixedTuple<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T: Float, const N: usize> IndexMut<usize> for FixedTuple<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}
