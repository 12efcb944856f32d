//! Trip/Alarm Threshold Parameters
//!
//! Base limits and sensitivities for the adaptive protection rule: a critical
//! asset (high MCVD index) gets less thermal and mechanical tolerance than a
//! healthy redundant one. Field revisions of the rule disagree on the exact
//! numbers, so all of them are configuration with these as defaults.

// ===== TEMPERATURE =====

/// Base oil/body temperature trip limit (deg C) for an asset with index zero.
///
/// Source: IEEE C57.91 loading guide, top-oil temperature limit for mineral-oil
/// transformers under planned loading beyond nameplate.
pub const BASE_TRIP_TEMP_C: f32 = 100.0;

/// Temperature tolerance removed per MCVD index point (deg C).
///
/// At index 10 (very critical) the trip limit drops by 25 degC. Observed
/// deployments use 2.5-3.0; 2.5 is the conservative relay-curve default.
pub const TEMP_SENSITIVITY_C_PER_POINT: f32 = 2.5;

/// Floor for the derived temperature trip limit (deg C).
///
/// Sits at the top of the healthy operating band for loaded oil-filled
/// equipment. A saturated index degrades to this fixed conservative limit
/// instead of driving the threshold toward (or below) normal operating
/// temperature, which would trip continuously.
pub const MIN_TRIP_TEMP_C: f32 = 65.0;

// ===== VIBRATION =====

/// Base vibration trip limit (mm/s RMS) for an asset with index zero.
///
/// Source: ISO 10816-3 zone C/D boundary for large rigid-mounted machines -
/// vibration severe enough to cause damage in continued operation.
pub const BASE_TRIP_VIBRATION_MM_S: f32 = 12.0;

/// Vibration tolerance removed per MCVD index point (mm/s).
pub const VIBRATION_SENSITIVITY_MM_S_PER_POINT: f32 = 0.8;

/// Floor for the derived vibration trip limit (mm/s RMS).
///
/// ISO 10816-3 zone A/B boundary; limits below this would trip on ordinary
/// running vibration.
pub const MIN_TRIP_VIBRATION_MM_S: f32 = 2.0;

// ===== ALARM TIER =====

/// Default alarm limit as a fraction of the trip limit.
///
/// The alarm tier is optional (some deployments run trip-only); when enabled
/// it warns at 85% of the trip limit so operators see the approach before the
/// relay acts.
pub const DEFAULT_ALARM_FRACTION: f32 = 0.85;
