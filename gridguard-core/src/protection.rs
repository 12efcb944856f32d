//! Adaptive Trip Thresholds and Live-State Classification
//!
//! The protection rule: the higher an asset's MCVD index, the less thermal and
//! mechanical tolerance it gets before the relay acts. Limits are derived
//! fresh from the index every cycle:
//!
//! ```text
//! trip_limit_temp      = max(base_temp - index * temp_sensitivity, temp_floor)
//! trip_limit_vibration = max(base_vib  - index * vib_sensitivity,  vib_floor)
//! alarm_limit_temp     = trip_limit_temp * alarm_fraction   (tier optional)
//! ```
//!
//! Classification compares the live reading against those limits, temperature
//! first (a thermal breach outranks a mechanical one when both are present),
//! and is recomputed from scratch each cycle - there is no transition history,
//! only the current reading versus the current limits.
//!
//! The floors keep a saturated index from driving a limit below the normal
//! operating band; without them a critical enough asset would trip on every
//! healthy reading.

use crate::asset::{AssetId, AssetRecord, CriticalityResult};
use crate::constants::protection::{
    BASE_TRIP_TEMP_C, BASE_TRIP_VIBRATION_MM_S, DEFAULT_ALARM_FRACTION, MIN_TRIP_TEMP_C,
    MIN_TRIP_VIBRATION_MM_S, TEMP_SENSITIVITY_C_PER_POINT, VIBRATION_SENSITIVITY_MM_S_PER_POINT,
};
use crate::errors::{EvalError, EvalResult};
use crate::traits::{ProtectionActuator, SensorReading, SensorSource};
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Threshold derivation parameters
///
/// Everything the adaptive rule needs, with defaults from
/// [`crate::constants::protection`]. The alarm tier is explicitly optional:
/// `None` removes it entirely and the evaluator classifies trip-or-normal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdConfig {
    /// Temperature trip limit for an asset with index zero (deg C)
    pub base_trip_temp_c: f32,
    /// Temperature tolerance removed per index point (deg C)
    pub temp_sensitivity_c: f32,
    /// Vibration trip limit for an asset with index zero (mm/s RMS)
    pub base_trip_vibration_mm_s: f32,
    /// Vibration tolerance removed per index point (mm/s)
    pub vibration_sensitivity_mm_s: f32,
    /// Alarm limit as a fraction of the trip limit; `None` disables the tier
    pub alarm_fraction: Option<f32>,
    /// Floor for the derived temperature limit (deg C)
    pub min_trip_temp_c: f32,
    /// Floor for the derived vibration limit (mm/s RMS)
    pub min_trip_vibration_mm_s: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            base_trip_temp_c: BASE_TRIP_TEMP_C,
            temp_sensitivity_c: TEMP_SENSITIVITY_C_PER_POINT,
            base_trip_vibration_mm_s: BASE_TRIP_VIBRATION_MM_S,
            vibration_sensitivity_mm_s: VIBRATION_SENSITIVITY_MM_S_PER_POINT,
            alarm_fraction: Some(DEFAULT_ALARM_FRACTION),
            min_trip_temp_c: MIN_TRIP_TEMP_C,
            min_trip_vibration_mm_s: MIN_TRIP_VIBRATION_MM_S,
        }
    }
}

impl ThresholdConfig {
    /// Default configuration without the alarm tier
    pub fn trip_only() -> Self {
        Self {
            alarm_fraction: None,
            ..Self::default()
        }
    }
}

/// Live state of an asset, recomputed every cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AssetStatus {
    /// All parameters inside their limits
    Normal = 0,
    /// Temperature in the warning band below trip
    Alarm = 1,
    /// A trip limit was breached; protective action required
    Trip = 2,
    /// No usable reading this cycle - neutral, never assumed Normal
    Unknown = 3,
}

impl AssetStatus {
    /// Panel name for the status
    pub const fn name(&self) -> &'static str {
        match self {
            AssetStatus::Normal => "NORMAL",
            AssetStatus::Alarm => "ALARM",
            AssetStatus::Trip => "TRIP",
            AssetStatus::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AssetStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

/// Cause of an alarm or trip, with the measured value and the limit it broke
///
/// Structured rather than a preformatted string; `Display` renders the
/// operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breach {
    /// Oil/body temperature above the derived trip limit
    Temperature {
        /// Measured temperature (deg C)
        measured: f32,
        /// Derived trip limit (deg C)
        limit: f32,
    },
    /// Vibration above the derived trip limit
    Vibration {
        /// Measured vibration (mm/s RMS)
        measured: f32,
        /// Derived trip limit (mm/s RMS)
        limit: f32,
    },
    /// Temperature inside the warning band above the alarm limit
    TemperatureWarning {
        /// Measured temperature (deg C)
        measured: f32,
        /// Derived alarm limit (deg C)
        limit: f32,
    },
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature { measured, limit } => write!(
                f,
                "oil temperature {measured:.1} C exceeds trip limit {limit:.1} C"
            ),
            Self::Vibration { measured, limit } => write!(
                f,
                "vibration {measured:.1} mm/s exceeds trip limit {limit:.1} mm/s"
            ),
            Self::TemperatureWarning { measured, limit } => write!(
                f,
                "oil temperature {measured:.1} C above alarm limit {limit:.1} C"
            ),
        }
    }
}

/// Limits derived from one asset's index for one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripLimits {
    /// Temperature trip limit (deg C), floor-clamped
    pub temp_c: f32,
    /// Vibration trip limit (mm/s RMS), floor-clamped
    pub vibration_mm_s: f32,
    /// Alarm temperature limit, present when the tier is enabled
    pub alarm_temp_c: Option<f32>,
}

/// Outcome of classifying one reading against one asset's limits
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdEvaluation {
    /// Classified status
    pub status: AssetStatus,
    /// Temperature trip limit used (deg C)
    pub trip_limit_temp_c: f32,
    /// Vibration trip limit used (mm/s RMS)
    pub trip_limit_vibration_mm_s: f32,
    /// Alarm temperature limit, when the tier is enabled
    pub alarm_limit_temp_c: Option<f32>,
    /// What was breached, for Alarm and Trip statuses
    pub breach: Option<Breach>,
    /// True exactly when `status == Trip` - the actuator must fire
    pub action_required: bool,
}

impl fmt::Display for ThresholdEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status, &self.breach) {
            (_, Some(breach)) => write!(f, "{breach}"),
            (AssetStatus::Unknown, None) => f.write_str("awaiting sensor data"),
            _ => f.write_str("parameters nominal"),
        }
    }
}

/// Result of one scan cycle for one asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleOutcome {
    /// The reading used, `None` when the source had no data
    pub reading: Option<SensorReading>,
    /// Classification against the derived limits
    pub evaluation: ThresholdEvaluation,
    /// `Some(success)` when the actuator was invoked this cycle
    pub actuated: Option<bool>,
}

/// Classifies live readings against index-derived limits
#[derive(Debug, Clone, Default)]
pub struct ThresholdEvaluator {
    config: ThresholdConfig,
}

impl ThresholdEvaluator {
    /// Evaluator using `config`
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// The threshold configuration in use
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Derive the trip/alarm limits for an asset with the given index
    pub fn limits(&self, mcvd_index: f32) -> TripLimits {
        let cfg = &self.config;
        let temp_c = (cfg.base_trip_temp_c - mcvd_index * cfg.temp_sensitivity_c)
            .max(cfg.min_trip_temp_c);
        let vibration_mm_s = (cfg.base_trip_vibration_mm_s
            - mcvd_index * cfg.vibration_sensitivity_mm_s)
            .max(cfg.min_trip_vibration_mm_s);
        let alarm_temp_c = cfg.alarm_fraction.map(|fraction| temp_c * fraction);

        TripLimits {
            temp_c,
            vibration_mm_s,
            alarm_temp_c,
        }
    }

    /// Classify a live reading against the asset's derived limits
    ///
    /// Pure and total: identical inputs always produce the identical
    /// evaluation. A non-finite reading classifies as `Unknown` - it must not
    /// slip through the comparisons and land on `Normal`.
    pub fn classify(
        &self,
        result: &CriticalityResult,
        reading: &SensorReading,
    ) -> ThresholdEvaluation {
        let limits = self.limits(result.mcvd_index);

        if !reading.oil_temp_c.is_finite() || !reading.vibration_mm_s.is_finite() {
            return Self::evaluation(limits, AssetStatus::Unknown, None);
        }

        // Temperature first: a thermal breach outranks a mechanical one
        if reading.oil_temp_c > limits.temp_c {
            return Self::evaluation(
                limits,
                AssetStatus::Trip,
                Some(Breach::Temperature {
                    measured: reading.oil_temp_c,
                    limit: limits.temp_c,
                }),
            );
        }

        if reading.vibration_mm_s > limits.vibration_mm_s {
            return Self::evaluation(
                limits,
                AssetStatus::Trip,
                Some(Breach::Vibration {
                    measured: reading.vibration_mm_s,
                    limit: limits.vibration_mm_s,
                }),
            );
        }

        if let Some(alarm_temp) = limits.alarm_temp_c {
            if reading.oil_temp_c > alarm_temp {
                return Self::evaluation(
                    limits,
                    AssetStatus::Alarm,
                    Some(Breach::TemperatureWarning {
                        measured: reading.oil_temp_c,
                        limit: alarm_temp,
                    }),
                );
            }
        }

        Self::evaluation(limits, AssetStatus::Normal, None)
    }

    /// Evaluation for an asset with no usable reading this cycle
    pub fn no_reading(&self, result: &CriticalityResult) -> ThresholdEvaluation {
        Self::evaluation(self.limits(result.mcvd_index), AssetStatus::Unknown, None)
    }

    /// Run one scan cycle over an ordered fleet
    ///
    /// `scores` must be the batch produced by
    /// [`CriticalityCalculator::evaluate`](crate::criticality::CriticalityCalculator::evaluate)
    /// over the same slice. One entry per asset, input order preserved:
    ///
    /// - a score error passes through as that asset's `Err` entry;
    /// - a source with no data yields an `Unknown` evaluation, logged, never a
    ///   batch abort;
    /// - a tripped asset invokes the actuator exactly once this cycle; a
    ///   refused trip is logged and recorded in the outcome, and later assets
    ///   are still scanned.
    ///
    /// `previous` supplies the caller's most recent sample per asset (from its
    /// history window) for sources that smooth on it.
    pub fn scan_cycle<S, A, P>(
        &self,
        assets: &[AssetRecord],
        scores: &[EvalResult<CriticalityResult>],
        source: &mut S,
        actuator: &mut A,
        mut previous: P,
    ) -> Vec<EvalResult<CycleOutcome>>
    where
        S: SensorSource,
        A: ProtectionActuator,
        P: FnMut(&AssetId) -> Option<SensorReading>,
    {
        debug_assert_eq!(assets.len(), scores.len());

        assets
            .iter()
            .zip(scores.iter())
            .map(|(asset, score)| {
                let result = match score {
                    Ok(result) => result,
                    Err(e) => {
                        log_warn!("asset {}: not scanned: {}", asset.id, e);
                        return Err(*e);
                    }
                };

                let prev = previous(&asset.id);
                let (reading, evaluation) = match source.read(&asset.id, prev.as_ref()) {
                    Ok(reading) => (Some(reading), self.classify(result, &reading)),
                    Err(EvalError::MissingSensorData) => {
                        log_debug!("asset {}: no reading this cycle", asset.id);
                        (None, self.no_reading(result))
                    }
                    Err(e) => return Err(e),
                };

                let actuated = if evaluation.action_required {
                    let success = match &evaluation.breach {
                        Some(breach) => actuator.trip(&asset.id, breach),
                        // Trip always carries a breach; keep the arm total
                        None => false,
                    };
                    if !success {
                        log_warn!("asset {}: protection actuator refused trip", asset.id);
                    }
                    Some(success)
                } else {
                    None
                };

                Ok(CycleOutcome {
                    reading,
                    evaluation,
                    actuated,
                })
            })
            .collect()
    }

    fn evaluation(
        limits: TripLimits,
        status: AssetStatus,
        breach: Option<Breach>,
    ) -> ThresholdEvaluation {
        ThresholdEvaluation {
            status,
            trip_limit_temp_c: limits.temp_c,
            trip_limit_vibration_mm_s: limits.vibration_mm_s,
            alarm_limit_temp_c: limits.alarm_temp_c,
            breach,
            action_required: status == AssetStatus::Trip,
        }
    }
}
