//! # tuplet — fixed- and variable-arity float tuples for Rust
//!
//! Tuple abstractions over IEEE-754 float components: fixed arities of
//! 2/3/4 and a runtime-sized variable arity, with component access and
//! mutation, tolerance-based comparison, index rearrangement
//! ("arrange"/"swizzle"), and componentwise arithmetic
//! (min/max/round/floor/ceil/trunc/abs). A foundational numeric data-type
//! layer for geometry, graphics, or physics code built on top of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use tuplet::prelude::*;
//!
//! let mut t = tuple3(1.0_f32, 2.0, 3.0);
//!
//! // Rearrange: component i takes the old value at mapping[i].
//! t.arrange([2, 0, 1])?;
//! assert!(t.eq_slice(&[3.0, 1.0, 2.0]));
//!
//! // Tolerance-based queries delegate to one set of scalar predicates.
//! let near_zero = tuple3(0.01_f32, -0.02, 0.0);
//! assert!(near_zero.is_zero_within(0.05)?);
//! assert!(!near_zero.is_zero());
//! # Result::<(), TupleError>::Ok(())
//! ```
//!
//! Variable arity works the same way, with explicit resizing:
//!
//! ```rust
//! use tuplet::prelude::*;
//!
//! let mut v = var_tuple(&[1.0_f64, 2.0, 3.0]);
//! v.resize(5); // prefix preserved, new components zero
//! assert!(v.eq_slice(&[1.0, 2.0, 3.0, 0.0, 0.0]));
//!
//! // The mapping length determines the result size.
//! let picked = v.rearranged(&[4, 0, 1])?;
//! assert!(picked.eq_slice(&[0.0, 1.0, 2.0]));
//! # Result::<(), TupleError>::Ok(())
//! ```
//!
//! ## Capability Split
//!
//! Every tuple kind is built on two traits: [`prelude::TupleRead`] (size,
//! indexed access, predicates, comparisons, copy-out conversions) and
//! [`prelude::TupleWrite`] (indexed and bulk mutation, swaps, extrema).
//! Code holding `&impl TupleRead` can never cause mutation through it.
//! The constant kinds (`ConstTuple`, `ConstVarTuple`) implement only the
//! read capability and never change after construction, which makes them
//! freely shareable across threads.
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, TupleError>`; the `?` operator
//! is idiomatic:
//!
//! ```rust
//! use tuplet::prelude::*;
//!
//! let t = tuple2(1.0_f32, 2.0);
//! assert_eq!(
//!     t.get(5),
//!     Err(TupleError::IndexOutOfBounds { index: 5, len: 2 })
//! );
//! ```
//!
//! Index and tolerance preconditions fail fast and never clamp or wrap.
//! Pure equality queries are total: comparing tuples of different sizes
//! is `false`, not an error.
//!
//! ## Rounding Policies
//!
//! Componentwise rounding takes any `Fn(T) -> T`;
//! [`prelude::RoundingMethod`] provides the common palette:
//!
//! ```rust
//! use tuplet::prelude::*;
//!
//! let t = tuple4(0.5_f32, 1.5, 2.5, -2.5);
//! let banker = t.round_with(|c| RoundingMethod::HalfEven.apply(c));
//! assert!(banker.eq_slice(&[0.0, 2.0, 2.0, -2.0]));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! tuplet = { version = "0.1", default-features = false }
//! ```
//!
//! The variable-arity and constant-variable kinds allocate through
//! `alloc`; the fixed-arity kinds are plain arrays and allocation-free
//! except for `to_vec` and in-place `arrange`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and precondition checks.
mod primitives;

// Layer 2: Math - scalar predicates and rounding policies.
mod math;

// Layer 3: Access - read/write/factory capability traits.
mod access;

// Layer 4: Engine - rearrangement and combination algorithms.
mod engine;

// Layer 5: Tuples - concrete tuple kinds.
mod tuples;

// High-level user-facing API surface.
mod api;

// Standard tuplet prelude.
pub mod prelude {
    pub use crate::api::{
        predicates, tuple2, tuple3, tuple4, var_tuple, ConstTuple, ConstTuple2, ConstTuple3,
        ConstTuple4, ConstVarTuple, FixedTuple, RoundingMethod, Tuple2, Tuple3, Tuple4,
        TupleError, TupleFactory, TupleRead, TupleWrite, VarTuple,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod access {
        pub use crate::access::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod tuples {
        pub use crate::tuples::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
