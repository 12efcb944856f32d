//! Aging/Obsolescence Model
//!
//! Converts `(install_year, useful_life_years)` into a dimensionless penalty
//! on the impact score. The policy is a three-segment curve over the
//! life-consumed ratio `lc = age / useful_life`:
//!
//! ```text
//! factor
//!   |                                        /
//!   |                                      /   slope = overlife_slope
//!   |                                    /
//!   |                          ________/  <- end_of_life_penalty at lc = 1.0
//!   |                 ______/
//!   | _______________/
//!   +---------------|--------|------------------ lc
//!                  knee     1.0
//! ```
//!
//! - `lc <= penalty_free_ratio`: no penalty, the asset is well within service
//!   life.
//! - `penalty_free_ratio < lc <= 1.0`: linear ramp from zero at the knee to
//!   `end_of_life_penalty` at exactly nominal life. The ramp is anchored at
//!   both ends, so the curve is continuous and non-decreasing at both
//!   breakpoints.
//! - `lc > 1.0`: `end_of_life_penalty + (lc - 1.0) * overlife_slope`,
//!   unbounded above as the asset ages past its design life.

use crate::constants::scoring::{
    AGING_END_OF_LIFE_PENALTY, AGING_OVERLIFE_SLOPE, AGING_PENALTY_FREE_RATIO,
};
use crate::errors::{EvalError, EvalResult};

/// Piecewise aging penalty curve
///
/// All three parameters are tunable; the defaults come from
/// [`crate::constants::scoring`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgingCurve {
    /// Fraction of design life consumed before any penalty applies
    pub penalty_free_ratio: f32,
    /// Penalty reached at exactly nominal end of life
    pub end_of_life_penalty: f32,
    /// Penalty slope per unit of life consumed past nominal life
    pub overlife_slope: f32,
}

impl Default for AgingCurve {
    fn default() -> Self {
        Self {
            penalty_free_ratio: AGING_PENALTY_FREE_RATIO,
            end_of_life_penalty: AGING_END_OF_LIFE_PENALTY,
            overlife_slope: AGING_OVERLIFE_SLOPE,
        }
    }
}

impl AgingCurve {
    /// Aging penalty for an asset installed in `install_year`, evaluated in
    /// `current_year`
    ///
    /// A future install year yields zero (the ratio clamps at 0 rather than
    /// going negative). `useful_life_years` must be positive and finite;
    /// anything else is a configuration fault, never a division by zero.
    pub fn aging_factor(
        &self,
        install_year: i32,
        useful_life_years: f32,
        current_year: i32,
    ) -> EvalResult<f32> {
        if !useful_life_years.is_finite() || useful_life_years <= 0.0 {
            return Err(EvalError::NonPositiveUsefulLife {
                years: useful_life_years,
            });
        }

        let age_years = (current_year - install_year) as f32;
        let life_consumed = (age_years / useful_life_years).max(0.0);

        let knee = self.penalty_free_ratio;
        if life_consumed <= knee {
            Ok(0.0)
        } else if life_consumed <= 1.0 {
            // knee < lc <= 1.0 implies knee < 1.0, so the denominator is positive
            Ok((life_consumed - knee) / (1.0 - knee) * self.end_of_life_penalty)
        } else {
            Ok(self.end_of_life_penalty + (life_consumed - 1.0) * self.overlife_slope)
        }
    }
}
