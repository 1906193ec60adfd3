#![cfg(feature = "dev")]
//! Tests for the variable-arity tuple kind.
//!
//! These tests verify the runtime-sized tuple:
//! - Construction and sizing
//! - Explicit resize semantics (prefix preserved, zero fill)
//! - Rearrangement with size changes
//! - Bulk assignment with and without resizing
//! - Componentwise extrema and the rounding family
//!
//! ## Test Organization
//!
//! 1. **Construction** - zeros, slices, vectors, other tuples
//! 2. **Resize** - Prefix preservation, zero fill, shrink
//! 3. **Rearrangement** - Size-changing mappings, swaps
//! 4. **Bulk Assignment** - set_slice, set_slice_resize
//! 5. **Extrema** - min/max with size checks
//! 6. **Rounding Family** - Componentwise maps
//! 7. **Round-Trips and Copies** - Vec round-trip, clone independence

use tuplet::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the construction paths and sizing queries.
#[test]
fn test_construction() {
    let zeroed = VarTuple::<f32>::zeros(4);
    assert_eq!(zeroed.len(), 4);
    assert!(zeroed.is_zero());

    let from_slice = var_tuple(&[1.0_f32, 2.0]);
    assert_eq!(from_slice.len(), 2);
    assert!(!from_slice.is_empty());

    let from_vec = VarTuple::from_vec(vec![3.0_f32, 4.0, 5.0]);
    assert!(from_vec.eq_slice(&[3.0, 4.0, 5.0]));

    let from_tuple = VarTuple::from_tuple(&tuple3(7.0_f32, 8.0, 9.0));
    assert!(from_tuple.eq_slice(&[7.0, 8.0, 9.0]));

    let empty = VarTuple::<f64>::zeros(0);
    assert!(empty.is_empty());
    assert!(empty.is_zero());
}

// ============================================================================
// Resize Tests
// ============================================================================

/// Test that growing preserves the prefix and zero-fills the tail.
#[test]
fn test_resize_grow() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);
    t.resize(5);

    assert_eq!(t.len(), 5);
    assert!(t.eq_slice(&[1.0, 2.0, 3.0, 0.0, 0.0]));
}

/// Test that shrinking keeps the prefix.
#[test]
fn test_resize_shrink() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);
    t.resize(2);
    assert!(t.eq_slice(&[1.0, 2.0]));

    t.resize(0);
    assert!(t.is_empty());
}

/// Test the new-instance resize against the in-place form.
#[test]
fn test_resized_matches_resize() {
    let t = var_tuple(&[1.0_f64, 2.0]);

    let grown = t.resized(4);
    assert!(grown.eq_slice(&[1.0, 2.0, 0.0, 0.0]));

    // The original is untouched
    assert!(t.eq_slice(&[1.0, 2.0]));
}

/// Test that setting values never changes the size.
#[test]
fn test_set_never_resizes() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);
    t.set(2, 9.0).unwrap();
    t.fill(5.0);

    assert_eq!(t.len(), 3);
}

// ============================================================================
// Rearrangement Tests
// ============================================================================

/// Test in-place rearrangement where the mapping length sets the size.
#[test]
fn test_rearrange_changes_size() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);

    t.rearrange(&[2, 0, 1, 2]).unwrap();
    assert_eq!(t.len(), 4);
    assert!(t.eq_slice(&[3.0, 1.0, 2.0, 3.0]));

    t.rearrange(&[1]).unwrap();
    assert!(t.eq_slice(&[1.0]));
}

/// Test the new-instance rearrangement and its identity property.
#[test]
fn test_rearranged() {
    let t = var_tuple(&[1.0_f32, 2.0, 3.0]);

    assert!(t.rearranged(&[0, 1, 2]).unwrap().eq_tuple(&t));
    assert!(t.rearranged(&[2, 0, 1]).unwrap().eq_slice(&[3.0, 1.0, 2.0]));

    assert_eq!(
        t.rearranged(&[0, 5]),
        Err(TupleError::IndexOutOfBounds { index: 5, len: 3 })
    );
}

/// Test index swaps in both forms.
#[test]
fn test_swaps() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);

    let swapped = t.swapped(0, 2).unwrap();
    assert!(swapped.eq_slice(&[3.0, 2.0, 1.0]));

    t.swap_components(0, 2).unwrap();
    assert!(t.eq_tuple(&swapped));

    assert_eq!(
        t.swapped(0, 9),
        Err(TupleError::IndexOutOfBounds { index: 9, len: 3 })
    );
}

// ============================================================================
// Bulk Assignment Tests
// ============================================================================

/// Test the exact-size slice assignment.
#[test]
fn test_set_slice() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);

    t.set_slice(&[4.0, 5.0, 6.0]).unwrap();
    assert!(t.eq_slice(&[4.0, 5.0, 6.0]));

    // Wrong length fails without resizing or writing
    assert_eq!(
        t.set_slice(&[1.0, 2.0]),
        Err(TupleError::SizeMismatch { got: 2, expected: 3 })
    );
    assert_eq!(
        t.set_slice(&[1.0, 2.0, 3.0, 4.0]),
        Err(TupleError::SizeMismatch { got: 4, expected: 3 })
    );
    assert!(t.eq_slice(&[4.0, 5.0, 6.0]));
}

/// Test the resizing slice assignment adopts the input length.
#[test]
fn test_set_slice_resize() {
    let mut t = var_tuple(&[1.0_f32, 2.0, 3.0]);

    t.set_slice_resize(&[7.0, 8.0]);
    assert_eq!(t.len(), 2);
    assert!(t.eq_slice(&[7.0, 8.0]));

    t.set_slice_resize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(t.len(), 5);
}

// ============================================================================
// Extrema Tests
// ============================================================================

/// Test componentwise extrema between equal-size tuples.
#[test]
fn test_min_max() {
    let a = var_tuple(&[1.0_f32, 5.0, -3.0]);
    let b = var_tuple(&[2.0_f32, 1.0, -4.0]);

    assert!(a.min(&b).unwrap().eq_slice(&[1.0, 1.0, -4.0]));
    assert!(a.max(&b).unwrap().eq_slice(&[2.0, 5.0, -3.0]));
}

/// Test that extrema require equal sizes on every path.
#[test]
fn test_min_max_size_mismatch() {
    let a = var_tuple(&[1.0_f32, 2.0, 3.0]);
    let short = var_tuple(&[1.0_f32]);

    assert!(a.min(&short).is_err());
    assert!(a.max(&short).is_err());

    let mut m = a.clone();
    assert_eq!(
        m.max_assign(&short),
        Err(TupleError::SizeMismatch { got: 1, expected: 3 })
    );
    assert!(m.eq_tuple(&a));
}

// ============================================================================
// Rounding Family Tests
// ============================================================================

/// Test the componentwise rounding family.
#[test]
fn test_rounding_family() {
    let t = var_tuple(&[1.5_f32, -1.5, 2.7]);

    assert!(t.floor().eq_slice(&[1.0, -2.0, 2.0]));
    assert!(t.ceil().eq_slice(&[2.0, -1.0, 3.0]));
    assert!(t.round().eq_slice(&[2.0, -2.0, 3.0]));
    assert!(t.trunc().eq_slice(&[1.0, -1.0, 2.0]));
    assert!(t.abs().eq_slice(&[1.5, 1.5, 2.7]));

    let banker = t.round_with(|c| RoundingMethod::HalfEven.apply(c));
    assert!(banker.eq_slice(&[2.0, -2.0, 3.0]));

    let mut u = t.clone();
    u.trunc_assign();
    assert!(u.eq_tuple(&t.trunc()));
}

// ============================================================================
// Round-Trip and Copy Tests
// ============================================================================

/// Test the Vec round-trip and equality across sizes.
#[test]
fn test_vec_round_trip() {
    let t = var_tuple(&[1.0_f64, -2.0, 3.5]);
    let rebuilt = VarTuple::from_slice(&t.to_vec());
    assert!(rebuilt.eq_tuple(&t));

    let vec: Vec<f64> = rebuilt.into();
    assert_eq!(vec, vec![1.0, -2.0, 3.5]);
}

/// Test that comparing tuples of different sizes is false, not an error.
#[test]
fn test_eq_across_sizes() {
    let a = var_tuple(&[1.0_f32, 2.0]);
    let b = var_tuple(&[1.0_f32, 2.0, 0.0]);

    assert!(!a.eq_tuple(&b));
    assert!(!b.eq_tuple(&a));
    assert!(!a.eq_tuple_within(&b, 100.0).unwrap());
}

/// Test that clones are independent deep copies.
#[test]
fn test_clone_independence() {
    let t = var_tuple(&[1.0_f32, 2.0]);
    let mut clone = t.clone();
    clone.set(0, 42.0).unwrap();

    assert!(t.eq_slice(&[1.0, 2.0]));
    assert!(clone.eq_slice(&[42.0, 2.0]));
}
