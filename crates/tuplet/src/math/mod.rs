//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure scalar functions used throughout the
//! crate:
//! - Finite/zero/equality/comparison predicates with optional tolerance
//! - Rounding policies for componentwise rounding
//!
//! These are reusable mathematical building blocks with no tuple-specific
//! logic.
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
//! Layer 3: Access
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar predicates with optional tolerance.
pub mod predicates;

/// Rounding policies.
pub mod rounding;
