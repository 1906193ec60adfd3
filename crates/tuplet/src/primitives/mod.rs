//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and precondition checks used
//! throughout the crate. It has zero internal dependencies within the
//! crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Fail-fast precondition checks.
pub mod validate;
