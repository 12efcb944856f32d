//! Error Types for Criticality Evaluation
//!
//! ## Design Philosophy
//!
//! The error system follows the same rules as the rest of the engine:
//!
//! 1. **Small Size**: Every variant keeps its data inline (an `f32` or nothing),
//!    so errors stay cheap to return from per-asset scoring in a batch loop.
//!
//! 2. **No Heap Allocation**: No `String` anywhere - the offending value is
//!    embedded in the variant and rendered through `Display`.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so a batch can collect one
//!    `Result` per asset without move gymnastics.
//!
//! ## Error Categories
//!
//! ### Configuration faults
//! Static asset data that cannot produce a meaningful index:
//! - `NonPositiveUsefulLife`: the life-consumed ratio would divide by zero
//! - `NonPositiveRedundancy`: the index would divide by zero
//! - `ZeroWeightSum`: raw criteria weights sum to zero with no fallback chosen
//!
//! These are surfaced per asset; a malformed record degrades its own row and
//! never aborts evaluation of the rest of the batch.
//!
//! ### Input faults
//! - `InvalidValue`: a numeric input was NaN or infinite
//! - `MissingSensorData`: no reading arrived for the asset this cycle; the
//!   evaluator maps this to the `Unknown` status instead of failing the scan
//!
//! Actuation failure is deliberately *not* an error variant: a refused trip is
//! reported in the cycle outcome and logged, because the classification has
//! already happened by the time the actuator answers.

use thiserror_no_std::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation errors - kept small and inline
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// Useful life must be strictly positive to derive a life-consumed ratio
    #[error("useful life {years} yr must be positive")]
    NonPositiveUsefulLife {
        /// The configured useful life, in years
        years: f32,
    },

    /// Redundancy divides the criticality index and must be strictly positive
    #[error("redundancy factor {factor} must be positive")]
    NonPositiveRedundancy {
        /// The configured redundancy factor
        factor: f32,
    },

    /// Raw criteria weights summed to zero with no fallback policy selected
    #[error("criteria weights sum to zero")]
    ZeroWeightSum,

    /// A numeric input made no sense (NaN, infinity)
    #[error("invalid value: not a finite number")]
    InvalidValue,

    /// No sensor reading was available for the asset this cycle
    #[error("no sensor reading available this cycle")]
    MissingSensorData,
}

impl EvalError {
    /// True for faults in the static asset/weight configuration
    ///
    /// Configuration faults are operator-fixable (inventory edits); the other
    /// variants describe runtime input conditions.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveUsefulLife { .. }
                | Self::NonPositiveRedundancy { .. }
                | Self::ZeroWeightSum
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EvalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonPositiveUsefulLife { years } =>
                defmt::write!(fmt, "useful life {} yr must be positive", years),
            Self::NonPositiveRedundancy { factor } =>
                defmt::write!(fmt, "redundancy factor {} must be positive", factor),
            Self::ZeroWeightSum =>
                defmt::write!(fmt, "criteria weights sum to zero"),
            Self::InvalidValue =>
                defmt::write!(fmt, "invalid value"),
            Self::MissingSensorData =>
                defmt::write!(fmt, "no sensor reading available"),
        }
    }
}
