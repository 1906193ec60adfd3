//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer implements the structural algorithms shared by every tuple
//! kind: rearrangement (arrange/swizzle) and componentwise combination.
//! Concrete tuple kinds wrap these in ergonomic methods.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Tuples
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Access
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Rearrangement, swizzle, and resize algorithms.
pub mod rearrange;

/// Componentwise combination of two tuples.
pub mod combine;
