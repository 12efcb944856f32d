//! Asset Inventory Data Model
//!
//! The record types the engine scores. `AssetRecord` is the operator-maintained
//! inventory row (created and edited outside the core); `CriticalityResult` is
//! derived from it every cycle and never persisted. `WeightConfig` carries the
//! operator's criteria split and is passed into each evaluation - the engine
//! itself holds no weight state.

use crate::constants::scoring::{
    DEFAULT_WEIGHT_ENVIRONMENTAL, DEFAULT_WEIGHT_OPERATIONAL, DEFAULT_WEIGHT_SAFETY,
};
use crate::errors::{EvalError, EvalResult};
use core::fmt;

/// Maximum length for inline asset IDs
///
/// IDs longer than this are rejected at construction; inventory tags like
/// `TR-01` or `CGBT-A2` fit comfortably.
pub const MAX_ASSET_ID: usize = 15;

/// Inline identifier for grid assets
///
/// Avoids heap allocation so records stay `Copy` and batches can live on the
/// stack of a gateway task.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId {
    len: u8,
    data: [u8; MAX_ASSET_ID],
}

impl AssetId {
    /// Create from string slice, `None` if the id exceeds [`MAX_ASSET_ID`]
    pub fn new(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() > MAX_ASSET_ID {
            return None;
        }

        let mut data = [0u8; MAX_ASSET_ID];
        data[..bytes.len()].copy_from_slice(bytes);

        Some(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        // We only store valid UTF-8 from new(), so this should never panic
        core::str::from_utf8(&self.data[..self.len as usize])
            .expect("AssetId contains invalid UTF-8")
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AssetId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AssetId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <&str as serde::Deserialize>::deserialize(deserializer)?;
        AssetId::new(s).ok_or_else(|| serde::de::Error::custom("asset id too long"))
    }
}

/// One row of the asset inventory
///
/// Immutable for the duration of an evaluation cycle. Sub-scores are on a
/// conceptual 0-10 scale; the engine does not enforce the scale, only that the
/// numbers are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetRecord {
    /// Stable unique identifier - the primary key across cycles
    pub id: AssetId,
    /// Calendar year the asset entered service
    pub install_year: i32,
    /// Design life in years; must be positive
    pub useful_life_years: f32,
    /// Personnel safety impact sub-score (0-10)
    pub safety_score: f32,
    /// Continuity-of-supply impact sub-score (0-10)
    pub operational_score: f32,
    /// Environmental impact sub-score (0-10)
    pub environmental_score: f32,
    /// Redundancy divisor: 1.0 = single point of failure, >1.0 = backed up
    pub redundancy_factor: f32,
}

/// Normalized criteria weights
///
/// Invariant: the three weights sum to 1. Construction normalizes raw values,
/// so callers can hand over slider positions directly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightConfig {
    w_safety: f32,
    w_operational: f32,
    w_environmental: f32,
}

impl WeightConfig {
    /// Equal thirds - the degenerate fallback when no preference exists
    pub const EQUAL: Self = Self {
        w_safety: 1.0 / 3.0,
        w_operational: 1.0 / 3.0,
        w_environmental: 1.0 / 3.0,
    };

    /// Normalize raw weights into a configuration summing to 1
    ///
    /// Fails with [`EvalError::ZeroWeightSum`] when the raw sum is zero -
    /// dividing through would be undefined, and silently equal-weighting is a
    /// policy the caller must opt into via [`WeightConfig::new_or_equal`].
    pub fn new(safety: f32, operational: f32, environmental: f32) -> EvalResult<Self> {
        if !safety.is_finite() || !operational.is_finite() || !environmental.is_finite() {
            return Err(EvalError::InvalidValue);
        }
        if safety < 0.0 || operational < 0.0 || environmental < 0.0 {
            return Err(EvalError::InvalidValue);
        }

        let sum = safety + operational + environmental;
        if sum <= 0.0 {
            return Err(EvalError::ZeroWeightSum);
        }

        Ok(Self {
            w_safety: safety / sum,
            w_operational: operational / sum,
            w_environmental: environmental / sum,
        })
    }

    /// Normalize raw weights, falling back to [`WeightConfig::EQUAL`] when the
    /// raw sum is zero or an input is not finite
    pub fn new_or_equal(safety: f32, operational: f32, environmental: f32) -> Self {
        Self::new(safety, operational, environmental).unwrap_or(Self::EQUAL)
    }

    /// Weighted multi-criteria impact score for one asset's sub-scores
    pub fn impact_score(&self, safety: f32, operational: f32, environmental: f32) -> f32 {
        self.w_safety * safety + self.w_operational * operational + self.w_environmental * environmental
    }

    /// Normalized safety weight
    pub fn w_safety(&self) -> f32 {
        self.w_safety
    }

    /// Normalized operational weight
    pub fn w_operational(&self) -> f32 {
        self.w_operational
    }

    /// Normalized environmental weight
    pub fn w_environmental(&self) -> f32 {
        self.w_environmental
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::new_or_equal(
            DEFAULT_WEIGHT_SAFETY,
            DEFAULT_WEIGHT_OPERATIONAL,
            DEFAULT_WEIGHT_ENVIRONMENTAL,
        )
    }
}

/// Derived criticality of one asset, recomputed every cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalityResult {
    /// Aging/obsolescence penalty, >= 0
    pub aging_factor: f32,
    /// Weighted multi-criteria impact score
    pub impact_score: f32,
    /// Composite index: `impact * (1 + aging) / redundancy`
    pub mcvd_index: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_id_roundtrip() {
        let id = AssetId::new("TR-01").unwrap();
        assert_eq!(id.as_str(), "TR-01");

        // Too long for the inline buffer
        assert!(AssetId::new("substation-4-feeder-12-breaker").is_none());
    }

    #[test]
    fn weights_normalize() {
        let w = WeightConfig::new(2.0, 1.0, 1.0).unwrap();
        assert!((w.w_safety() - 0.5).abs() < 1e-6);
        assert!((w.w_operational() - 0.25).abs() < 1e-6);
        assert!((w.w_environmental() - 0.25).abs() < 1e-6);
        assert!((w.w_safety() + w.w_operational() + w.w_environmental() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_weight_sum_rejected() {
        assert_eq!(
            WeightConfig::new(0.0, 0.0, 0.0),
            Err(EvalError::ZeroWeightSum)
        );
        assert_eq!(WeightConfig::new_or_equal(0.0, 0.0, 0.0), WeightConfig::EQUAL);
    }

    #[test]
    fn negative_and_nan_weights_rejected() {
        assert_eq!(
            WeightConfig::new(-0.5, 1.0, 0.5),
            Err(EvalError::InvalidValue)
        );
        assert_eq!(
            WeightConfig::new(f32::NAN, 1.0, 0.5),
            Err(EvalError::InvalidValue)
        );
    }

    #[test]
    fn impact_score_weighted_sum() {
        // 0.6*9 + 0.3*10 + 0.1*5 = 8.9
        let w = WeightConfig::new(0.6, 0.3, 0.1).unwrap();
        let impact = w.impact_score(9.0, 10.0, 5.0);
        assert!((impact - 8.9).abs() < 1e-4);
    }
}
