//! Layer 5: Tuples
//!
//! # Purpose
//!
//! This layer provides the concrete tuple kinds: fixed arity
//! ([`fixed::FixedTuple`] with the 2/3/4 aliases), variable arity
//! ([`dynamic::VarTuple`]), and the immutable constant kinds
//! ([`constant::ConstTuple`], [`constant::ConstVarTuple`]). Each wraps the
//! shared access capabilities and engine algorithms in an ergonomic
//! surface.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Tuples ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Access
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fixed-arity tuples (2/3/4 components).
pub mod fixed;

/// Variable-arity tuples.
pub mod dynamic;

/// Immutable tuples.
pub mod constant;
