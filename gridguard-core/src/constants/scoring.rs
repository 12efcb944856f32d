//! Criteria Weights and Aging Curve Parameters
//!
//! Defaults for the multi-criteria impact score and the aging/obsolescence
//! penalty. All of these are starting points for operator tuning, not physical
//! constants.

// ===== CRITERIA WEIGHTS =====

/// Default weight for the safety sub-score.
///
/// Safety-led split used by the operator panel before any tuning:
/// personnel risk dominates, then continuity of supply, then environment.
/// Raw weights are normalized at construction, so the three defaults only
/// need to express a ratio.
pub const DEFAULT_WEIGHT_SAFETY: f32 = 0.5;

/// Default weight for the operational (continuity of supply) sub-score.
pub const DEFAULT_WEIGHT_OPERATIONAL: f32 = 0.4;

/// Default weight for the environmental sub-score.
pub const DEFAULT_WEIGHT_ENVIRONMENTAL: f32 = 0.1;

// ===== AGING CURVE =====

/// Fraction of design life an asset consumes before any aging penalty applies.
///
/// Failure statistics for oil-filled transformers and LV switchgear are flat
/// through the first half of design life (the bottom of the bathtub curve), so
/// the model charges nothing there.
pub const AGING_PENALTY_FREE_RATIO: f32 = 0.5;

/// Aging penalty reached at exactly nominal end of life.
///
/// A 20% uplift on the impact score for an asset at 100% life consumed. The
/// ramp from the penalty-free knee to this value is linear, so the curve is
/// continuous at both breakpoints.
pub const AGING_END_OF_LIFE_PENALTY: f32 = 0.2;

/// Penalty slope per unit of life consumed past nominal end of life.
///
/// Steeper than the in-life ramp: an asset at twice its design life carries
/// `0.2 + 0.5 = 0.7`. Unbounded above - obsolescence keeps accruing as long
/// as the asset stays in service.
pub const AGING_OVERLIFE_SLOPE: f32 = 0.5;
