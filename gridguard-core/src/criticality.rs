//! Criticality Index Calculator
//!
//! Composes the aging model and the impact scorer into the MCVD index:
//!
//! ```text
//! mcvd_index = impact_score * (1 + aging_factor) / redundancy_factor
//! ```
//!
//! The index rises with impact and age, and falls with redundancy. Batch
//! evaluation is order-preserving and degrades per asset: a malformed record
//! yields its own `Err` entry and never aborts the rest of the batch.

use crate::aging::AgingCurve;
use crate::asset::{AssetRecord, CriticalityResult, WeightConfig};
use crate::errors::{EvalError, EvalResult};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Stateless calculator for a fleet of assets
///
/// Holds only the aging curve and the evaluation year; weights arrive with
/// every call so operator tuning takes effect on the next cycle without
/// touching the calculator.
#[derive(Debug, Clone)]
pub struct CriticalityCalculator {
    curve: AgingCurve,
    current_year: i32,
}

impl CriticalityCalculator {
    /// Calculator evaluating against a fixed calendar year
    pub fn new(curve: AgingCurve, current_year: i32) -> Self {
        Self {
            curve,
            current_year,
        }
    }

    /// Calculator evaluating against the wall-clock year
    #[cfg(feature = "chrono")]
    pub fn for_current_year(curve: AgingCurve) -> Self {
        use chrono::Datelike;
        Self::new(curve, chrono::Utc::now().year())
    }

    /// The year assets are aged against
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// The aging curve in use
    pub fn curve(&self) -> &AgingCurve {
        &self.curve
    }

    /// Score a single asset
    ///
    /// Rejects non-finite numeric fields up front so NaN can never flow into
    /// the index, then guards the redundancy divisor before dividing.
    pub fn score(
        &self,
        asset: &AssetRecord,
        weights: &WeightConfig,
    ) -> EvalResult<CriticalityResult> {
        let numeric = [
            asset.useful_life_years,
            asset.safety_score,
            asset.operational_score,
            asset.environmental_score,
            asset.redundancy_factor,
        ];
        if numeric.iter().any(|v| !v.is_finite()) {
            return Err(EvalError::InvalidValue);
        }
        if asset.redundancy_factor <= 0.0 {
            return Err(EvalError::NonPositiveRedundancy {
                factor: asset.redundancy_factor,
            });
        }

        let aging_factor =
            self.curve
                .aging_factor(asset.install_year, asset.useful_life_years, self.current_year)?;
        let impact_score = weights.impact_score(
            asset.safety_score,
            asset.operational_score,
            asset.environmental_score,
        );
        let mcvd_index = impact_score * (1.0 + aging_factor) / asset.redundancy_factor;

        Ok(CriticalityResult {
            aging_factor,
            impact_score,
            mcvd_index,
        })
    }

    /// Score an ordered batch, one entry per asset, input order preserved
    ///
    /// Sorting by index is a presentation concern and happens outside the
    /// core.
    pub fn evaluate(
        &self,
        assets: &[AssetRecord],
        weights: &WeightConfig,
    ) -> Vec<EvalResult<CriticalityResult>> {
        assets.iter().map(|asset| self.score(asset, weights)).collect()
    }
}
