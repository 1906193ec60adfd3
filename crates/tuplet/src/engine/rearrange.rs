//! Rearrangement algorithms shared by every tuple kind.
//!
//! ## Purpose
//!
//! This module implements the one algorithm behind arrange and swizzle:
//! given a read-index mapping and a source tuple, produce a destination
//! tuple where `dest[i] = source[mapping[i]]`. Swizzle is the
//! transposition special case. Resize shares the prefix-carrying reading
//! discipline but is storage-bound, so it lives on the variable-arity
//! tuple.
//!
//! ## Design notes
//!
//! * **Validate-then-run**: Mappings are fully validated before any
//!   component is written, so a bad mapping never leaves a tuple partially
//!   rearranged.
//! * **Aliasing**: The in-place form reads every source value before
//!   writing any destination value. Mappings may repeat indices, so
//!   writing eagerly would corrupt later reads through the overwritten
//!   slots.
//! * **Generic results**: New-instance forms build through
//!   [`TupleFactory`], so one implementation serves fixed and variable
//!   arity alike.
//!
//! ## Invariants
//!
//! * Result size equals mapping length.
//! * Every mapping index is `< source.size()`; duplicates and unused
//!   indices are allowed.
//!
//! ## Non-goals
//!
//! * This module does not define the named pair-swap shorthands; those are
//!   convenience wrappers on the concrete tuple kinds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::access::{TupleFactory, TupleRead, TupleWrite};
use crate::primitives::errors::TupleError;
use crate::primitives::validate::Validator;

// ============================================================================
// New-Instance Rearrangement
// ============================================================================

/// Build a new tuple where component `i` is `source[mapping[i]]`.
///
/// The result has `mapping.len()` components, which may differ from the
/// source size. Fails with [`TupleError::IndexOutOfBounds`] if any mapping
/// index is `>= source.size()`, and with whatever error the destination
/// factory reports for an unacceptable result size (fixed-arity kinds
/// reject sizes other than their arity).
pub fn rearranged<T, S, D>(source: &S, mapping: &[usize]) -> Result<D, TupleError>
where
    T: Float,
    S: TupleRead<T> + ?Sized,
    D: TupleFactory<T>,
{
    let components = source.as_components();
    Validator::mapping(mapping, components.len())?;
    D::from_fn(mapping.len(), |i| components[mapping[i]])
}

/// Build a new tuple with the components at `a` and `b` exchanged.
///
/// This is the transposition special case of [`rearranged`]: the identity
/// mapping with two positions swapped. Fails with
/// [`TupleError::IndexOutOfBounds`] if either position is invalid.
pub fn swapped<T, S, D>(source: &S, a: usize, b: usize) -> Result<D, TupleError>
where
    T: Float,
    S: TupleRead<T> + ?Sized,
    D: TupleFactory<T>,
{
    let components = source.as_components();
    Validator::index(a, components.len())?;
    Validator::index(b, components.len())?;
    D::from_fn(components.len(), |i| {
        if i == a {
            components[b]
        } else if i == b {
            components[a]
        } else {
            components[i]
        }
    })
}

// ============================================================================
// In-Place Rearrangement
// ============================================================================

/// Rearrange a tuple in place: component `i` takes the old value at
/// `mapping[i]`.
///
/// The mapping length must equal the tuple size
/// ([`TupleError::SizeMismatch`] otherwise); in-place rearrangement cannot
/// change arity. Every mapping index must be `< size()`. The tuple is
/// untouched on any failure.
///
/// Source and destination alias here, so the old components are
/// snapshotted in full before the first write.
pub fn arrange_in_place<T, W>(tuple: &mut W, mapping: &[usize]) -> Result<(), TupleError>
where
    T: Float,
    W: TupleWrite<T> + ?Sized,
{
    let size = tuple.size();
    Validator::exact_size(mapping.len(), size)?;
    Validator::mapping(mapping, size)?;

    let snapshot: Vec<T> = tuple.to_vec();
    let components = tuple.as_components_mut();
    for (i, &source_index) in mapping.iter().enumerate() {
        components[i] = snapshot[source_index];
    }
    Ok(())
}

