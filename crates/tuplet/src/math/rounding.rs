//! Rounding policies for componentwise rounding.
//!
//! ## Purpose
//!
//! This module provides the palette of rounding policies accepted by the
//! tuple `round_with` operations. Each policy maps a scalar to the
//! integral value selected by its tie-breaking rule.
//!
//! ## Design notes
//!
//! * **Pluggable**: `round_with` accepts any `Fn(T) -> T`; this enum is
//!   the provided palette, not a closed set.
//! * **Tie handling**: Policies differ only in where they send values
//!   exactly halfway between two integers.
//!
//! ## Key concepts
//!
//! * **HalfAwayFromZero**: The default; IEEE `round` semantics.
//! * **HalfEven**: Banker's rounding; ties go to the even neighbor.
//!
//! ## Invariants
//!
//! * Every policy returns an integral value for finite input.
//! * Policies agree on all inputs that are not exact ties.
//! * NaN and infinities pass through unchanged.
//!
//! ## Non-goals
//!
//! * This module does not round to a number of decimal places.
//! * This module does not perform componentwise iteration.

// External dependencies
use num_traits::Float;

// ============================================================================
// Rounding Method Enum
// ============================================================================

/// Rounding policy for componentwise rounding.
///
/// Each policy defines a function ℝ → ℤ (as floats) distinguished by its
/// tie-breaking rule for values exactly halfway between two integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMethod {
    /// Round to nearest; ties away from zero (IEEE `round`).
    ///
    /// This is the default and matches `Float::round`.
    #[default]
    HalfAwayFromZero,

    /// Round to nearest; ties toward zero.
    HalfTowardZero,

    /// Round to nearest; ties toward positive infinity.
    HalfUp,

    /// Round to nearest; ties toward negative infinity.
    HalfDown,

    /// Round to nearest; ties to the even neighbor (banker's rounding).
    HalfEven,

    /// Round toward negative infinity (`floor`).
    Floor,

    /// Round toward positive infinity (`ceil`).
    Ceil,

    /// Round toward zero (`trunc`).
    TowardZero,

    /// Round away from zero.
    AwayFromZero,
}

impl RoundingMethod {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the rounding policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            RoundingMethod::HalfAwayFromZero => "HalfAwayFromZero",
            RoundingMethod::HalfTowardZero => "HalfTowardZero",
            RoundingMethod::HalfUp => "HalfUp",
            RoundingMethod::HalfDown => "HalfDown",
            RoundingMethod::HalfEven => "HalfEven",
            RoundingMethod::Floor => "Floor",
            RoundingMethod::Ceil => "Ceil",
            RoundingMethod::TowardZero => "TowardZero",
            RoundingMethod::AwayFromZero => "AwayFromZero",
        }
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Apply the rounding policy to a scalar.
    pub fn apply<T: Float>(&self, x: T) -> T {
        if !x.is_finite() {
            return x;
        }

        let half = T::from(0.5).unwrap();

        match self {
            RoundingMethod::HalfAwayFromZero => x.round(),

            RoundingMethod::HalfTowardZero => x.signum() * (x.abs() - half).ceil(),

            RoundingMethod::HalfUp => (x + half).floor(),

            RoundingMethod::HalfDown => (x - half).ceil(),

            RoundingMethod::HalfEven => {
                let floor = x.floor();
                // floor-relative offset is sign-stable, unlike fract()
                if x - floor == half {
                    let two = T::one() + T::one();
                    if (floor / two).fract() == T::zero() {
                        floor
                    } else {
                        floor + T::one()
                    }
                } else {
                    x.round()
                }
            }

            RoundingMethod::Floor => x.floor(),

            RoundingMethod::Ceil => x.ceil(),

            RoundingMethod::TowardZero => x.trunc(),

            RoundingMethod::AwayFromZero => x.signum() * x.abs().ceil(),
        }
    }
}
