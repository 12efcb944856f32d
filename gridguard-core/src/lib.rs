//! Core criticality engine for GridGuard
//!
//! Computes a composite criticality index (MCVD) for electrical-grid assets
//! from static inventory data, and tightens trip/alarm thresholds as that
//! index rises. The engine classifies each asset's live state as
//! NORMAL / ALARM / TRIP and decides when the protection actuator must fire;
//! it never performs the physical trip itself.
//!
//! Key constraints:
//! - Cycle-driven and synchronous: one scan evaluates the whole fleet
//! - No process-wide mutable state; weights and history belong to the caller
//! - A malformed asset degrades its own row, never the batch
//!
//! ```
//! use gridguard_core::{
//!     AgingCurve, AssetId, AssetRecord, CriticalityCalculator, SensorReading,
//!     ThresholdConfig, ThresholdEvaluator, WeightConfig,
//! };
//!
//! let transformer = AssetRecord {
//!     id: AssetId::new("TR-01").unwrap(),
//!     install_year: 1995,
//!     useful_life_years: 30.0,
//!     safety_score: 9.0,
//!     operational_score: 10.0,
//!     environmental_score: 5.0,
//!     redundancy_factor: 1.0,
//! };
//!
//! let calculator = CriticalityCalculator::new(AgingCurve::default(), 2025);
//! let weights = WeightConfig::new(0.6, 0.3, 0.1)?;
//! let result = calculator.score(&transformer, &weights)?;
//!
//! let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());
//! let reading = SensorReading { oil_temp_c: 80.0, vibration_mm_s: 3.0, load_pct: 70.0 };
//! let evaluation = evaluator.classify(&result, &reading);
//!
//! // An end-of-life transformer gets a tightened limit; 80 C is over it
//! assert!(evaluation.action_required);
//! # Ok::<(), gridguard_core::EvalError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod aging;
pub mod asset;
pub mod constants;
pub mod criticality;
pub mod errors;
pub mod history;
pub mod protection;
pub mod traits;

// Public API
pub use aging::AgingCurve;
pub use asset::{AssetId, AssetRecord, CriticalityResult, WeightConfig};
pub use criticality::CriticalityCalculator;
pub use errors::{EvalError, EvalResult};
pub use protection::{
    AssetStatus, Breach, CycleOutcome, ThresholdConfig, ThresholdEvaluation, ThresholdEvaluator,
    TripLimits,
};
pub use traits::{ProtectionActuator, SensorReading, SensorSource};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
