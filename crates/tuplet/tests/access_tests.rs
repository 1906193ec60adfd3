#![cfg(feature = "dev")]
//! Tests for the capability traits.
//!
//! These tests verify the shared read/write capability layer:
//! - Indexed access and mutation with range checks
//! - Copy-out conversions and the caller-buffer variant
//! - Componentwise predicates and cross-kind equality
//! - Bulk assignment and componentwise extrema
//!
//! ## Test Organization
//!
//! 1. **Indexed Access** - get/set, range errors
//! 2. **Copy-Out Conversions** - to_vec, write_into
//! 3. **Predicates** - finite/zero conjunctions
//! 4. **Equality** - Cross-kind, size mismatch, tolerance
//! 5. **Comparison** - compare_at with and without tolerance
//! 6. **Bulk Mutation** - fill, set_from_slice, set_from_tuple
//! 7. **Extrema and Mapping** - min_assign/max_assign, map_assign

use core::cmp::Ordering;

use tuplet::prelude::*;

// ============================================================================
// Indexed Access Tests
// ============================================================================

/// Test indexed reads against positional accessors.
#[test]
fn test_get_matches_positional_accessors() {
    let t = tuple4(1.0_f32, 2.0, 3.0, 4.0);
    assert_eq!(t.get(0).unwrap(), t.x());
    assert_eq!(t.get(1).unwrap(), t.y());
    assert_eq!(t.get(2).unwrap(), t.z());
    assert_eq!(t.get(3).unwrap(), t.w());
}

/// Test that reads and writes past the end fail with the index and size.
#[test]
fn test_index_range_errors() {
    let mut t = tuple2(1.0_f32, 2.0);

    assert_eq!(
        t.get(2),
        Err(TupleError::IndexOutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(
        t.set(5, 0.0),
        Err(TupleError::IndexOutOfBounds { index: 5, len: 2 })
    );

    // The failed set left the components alone
    assert!(t.eq_slice(&[1.0, 2.0]));
}

/// Test that setters accept non-finite values.
///
/// Finiteness is a query, not an enforced invariant.
#[test]
fn test_set_accepts_non_finite() {
    let mut t = tuple2(1.0_f32, 2.0);
    t.set(0, f32::NAN).unwrap();
    t.set(1, f32::INFINITY).unwrap();

    assert!(t.get(0).unwrap().is_nan());
    assert_eq!(t.get(1).unwrap(), f32::INFINITY);
    assert!(!t.is_finite());
}

// ============================================================================
// Copy-Out Conversion Tests
// ============================================================================

/// Test that to_vec copies out and never aliases internal storage.
#[test]
fn test_to_vec_copies_out() {
    let mut t = tuple3(1.0_f32, 2.0, 3.0);
    let copied = t.to_vec();
    t.set_x(9.0);

    assert_eq!(copied, vec![1.0, 2.0, 3.0]);
    assert_eq!(t.x(), 9.0);
}

/// Test the caller-buffer variant writes the prefix and leaves the rest.
#[test]
fn test_write_into_prefix() {
    let t = tuple3(1.0_f32, 2.0, 3.0);
    let mut buffer = [7.0_f32; 5];

    t.write_into(&mut buffer).unwrap();
    assert_eq!(buffer, [1.0, 2.0, 3.0, 7.0, 7.0]);
}

/// Test that an undersized buffer is rejected before any write.
#[test]
fn test_write_into_rejects_small_buffer() {
    let t = tuple3(1.0_f32, 2.0, 3.0);
    let mut buffer = [7.0_f32; 2];

    assert_eq!(
        t.write_into(&mut buffer),
        Err(TupleError::BufferTooSmall { got: 2, need: 3 })
    );
    assert_eq!(buffer, [7.0, 7.0]);
}

// ============================================================================
// Predicate Tests
// ============================================================================

/// Test finite/zero conjunctions over all components.
#[test]
fn test_componentwise_predicates() {
    assert!(tuple3(1.0_f32, -2.0, 0.5).is_finite());
    assert!(!tuple3(1.0_f32, f32::NAN, 0.5).is_finite());
    assert!(!tuple3(1.0_f32, f32::NEG_INFINITY, 0.5).is_finite());

    assert!(tuple2(0.0_f32, -0.0).is_zero());
    assert!(!tuple2(0.0_f32, 1e-20).is_zero());
}

/// Test the tolerance-band zero check from the concrete scenario.
#[test]
fn test_is_zero_within_scenario() {
    assert!(tuple3(0.01_f32, -0.02, 0.0).is_zero_within(0.05).unwrap());
    assert!(!tuple3(0.01_f32, -0.1, 0.0).is_zero_within(0.05).unwrap());
    assert!(matches!(
        tuple3(0.0_f32, 0.0, 0.0).is_zero_within(-0.05),
        Err(TupleError::InvalidTolerance(_))
    ));
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Test exact equality across tuple kinds.
///
/// A fixed tuple, a variable tuple, and a constant tuple with the same
/// components are all equal through the read capability.
#[test]
fn test_eq_tuple_cross_kind() {
    let fixed = tuple3(1.0_f32, 2.0, 3.0);
    let var = var_tuple(&[1.0_f32, 2.0, 3.0]);
    let constant = ConstTuple3::new([1.0_f32, 2.0, 3.0]);

    assert!(fixed.eq_tuple(&var));
    assert!(var.eq_tuple(&fixed));
    assert!(fixed.eq_tuple(&constant));
    assert!(constant.eq_tuple(&var));
}

/// Test that a size mismatch is unequal, never an error.
#[test]
fn test_eq_size_mismatch_is_false() {
    let fixed = tuple3(1.0_f32, 2.0, 3.0);
    let short = var_tuple(&[1.0_f32, 2.0]);

    assert!(!fixed.eq_tuple(&short));
    assert!(!fixed.eq_slice(&[1.0, 2.0]));
    assert!(!fixed.eq_tuple_within(&short, 10.0).unwrap());
}

/// Test tolerant equality bands and the tolerance precondition.
#[test]
fn test_eq_tuple_within() {
    let a = tuple2(1.0_f32, 2.0);
    let b = tuple2(1.04_f32, 1.97);

    assert!(a.eq_tuple_within(&b, 0.05).unwrap());
    assert!(!a.eq_tuple_within(&b, 0.01).unwrap());
    assert!(!a.eq_tuple(&b));

    // The precondition fires even when sizes mismatch
    let short = var_tuple(&[1.0_f32]);
    assert!(matches!(
        a.eq_tuple_within(&short, -1.0),
        Err(TupleError::InvalidTolerance(_))
    ));
}

/// Test slice equality against literal component values.
#[test]
fn test_eq_slice_literals() {
    let t = tuple2(1.5_f32, -2.5);
    assert!(t.eq_slice(&[1.5, -2.5]));
    assert!(!t.eq_slice(&[1.5, -2.4]));
    assert!(t.eq_slice_within(&[1.49, -2.51], 0.02).unwrap());
}

// ============================================================================
// Comparison Tests
// ============================================================================

/// Test per-component three-way comparison between tuples.
#[test]
fn test_compare_at() {
    let a = tuple3(1.0_f32, 5.0, 2.0);
    let b = var_tuple(&[1.0_f32, 2.0, 9.0]);

    assert_eq!(a.compare_at(0, &b).unwrap(), Ordering::Equal);
    assert_eq!(a.compare_at(1, &b).unwrap(), Ordering::Greater);
    assert_eq!(a.compare_at(2, &b).unwrap(), Ordering::Less);

    assert_eq!(
        a.compare_at(3, &b),
        Err(TupleError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

/// Test tolerant per-component comparison.
#[test]
fn test_compare_at_within() {
    let a = tuple2(1.0_f32, 5.0);
    let b = tuple2(1.04_f32, 2.0);

    assert_eq!(a.compare_at_within(0, &b, 0.05).unwrap(), Ordering::Equal);
    assert_eq!(a.compare_at_within(1, &b, 0.05).unwrap(), Ordering::Greater);
}

// ============================================================================
// Bulk Mutation Tests
// ============================================================================

/// Test fill and the bulk assignment paths.
#[test]
fn test_bulk_assignment() {
    let mut t = tuple3(1.0_f32, 2.0, 3.0);

    t.fill(7.0);
    assert!(t.eq_slice(&[7.0, 7.0, 7.0]));

    // Slices may supply extra trailing components
    t.set_from_slice(&[1.0, 2.0, 3.0, 99.0]).unwrap();
    assert!(t.eq_slice(&[1.0, 2.0, 3.0]));

    // Another tuple works the same way through set_from_tuple
    let source = var_tuple(&[4.0_f32, 5.0, 6.0, 7.0]);
    t.set_from_tuple(&source).unwrap();
    assert!(t.eq_slice(&[4.0, 5.0, 6.0]));
}

/// Test that an undersized bulk source is rejected without mutation.
#[test]
fn test_bulk_assignment_rejects_short_source() {
    let mut t = tuple3(1.0_f32, 2.0, 3.0);

    assert_eq!(
        t.set_from_slice(&[9.0, 9.0]),
        Err(TupleError::InsufficientComponents { got: 2, need: 3 })
    );
    assert!(t.eq_slice(&[1.0, 2.0, 3.0]));
}

/// Test in-place component swaps with range checks.
#[test]
fn test_swap_components() {
    let mut t = tuple3(1.0_f32, 2.0, 3.0);

    t.swap_components(0, 2).unwrap();
    assert!(t.eq_slice(&[3.0, 2.0, 1.0]));

    assert_eq!(
        t.swap_components(0, 3),
        Err(TupleError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert!(t.eq_slice(&[3.0, 2.0, 1.0]));
}

// ============================================================================
// Extrema and Mapping Tests
// ============================================================================

/// Test componentwise extrema assignment from the concrete scenario.
#[test]
fn test_min_max_assign() {
    let mut t = tuple3(1.0_f32, 5.0, -3.0);
    let other = var_tuple(&[2.0_f32, 1.0, -4.0]);

    t.min_assign(&other).unwrap();
    assert!(t.eq_slice(&[1.0, 1.0, -4.0]));

    let mut u = tuple3(1.0_f32, 5.0, -3.0);
    u.max_assign(&other).unwrap();
    assert!(u.eq_slice(&[2.0, 5.0, -3.0]));
}

/// Test that extrema assignment requires matching sizes.
#[test]
fn test_min_assign_rejects_size_mismatch() {
    let mut t = tuple3(1.0_f32, 2.0, 3.0);
    let short = var_tuple(&[1.0_f32, 2.0]);

    assert_eq!(
        t.min_assign(&short),
        Err(TupleError::SizeMismatch { got: 2, expected: 3 })
    );
    assert!(t.eq_slice(&[1.0, 2.0, 3.0]));
}

/// Test componentwise mapping in place.
#[test]
fn test_map_assign() {
    let mut t = var_tuple(&[1.0_f32, -2.0, 3.0]);
    t.map_assign(|c| c * 2.0);
    assert!(t.eq_slice(&[2.0, -4.0, 6.0]));
}
