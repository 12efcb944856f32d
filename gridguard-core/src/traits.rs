//! Collaborator Seams
//!
//! The engine decides; it never touches hardware. These traits are the two
//! boundaries where a deployment plugs in its physical layer: a reading source
//! (fieldbus gateway, historian, simulator) and a protection actuator (relay
//! driver). Both are synchronous calls with assumed-fast latency - the scan
//! cycle never suspends.
//!
//! Deterministic in-memory implementations live here too, so tests and
//! examples never need a live data source.

use crate::asset::AssetId;
use crate::errors::{EvalError, EvalResult};
use crate::protection::Breach;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One live sensor sample for an asset
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Oil/body temperature in deg C
    pub oil_temp_c: f32,
    /// Vibration in mm/s RMS
    pub vibration_mm_s: f32,
    /// Load as a percentage of rating
    pub load_pct: f32,
}

/// Source of live readings - acquisition layer or simulator
///
/// `previous` is the caller's most recent sample for the asset (from its
/// history window), offered so sources that smooth or random-walk can anchor
/// on it. Sources are free to ignore it.
pub trait SensorSource {
    /// Acquire the current reading for `asset`
    ///
    /// Returns [`EvalError::MissingSensorData`] when no sample is available
    /// this cycle; the scan maps that to the `Unknown` status rather than
    /// failing the batch.
    fn read(
        &mut self,
        asset: &AssetId,
        previous: Option<&SensorReading>,
    ) -> EvalResult<SensorReading>;
}

/// Protective actuation boundary - breaker/relay driver
///
/// Invoked by the scan cycle exactly once per tripped asset per cycle. The
/// return value reports whether the physical (or simulated) trip succeeded;
/// `false` is logged and recorded, never propagated as a fatal error.
pub trait ProtectionActuator {
    /// Request a protective trip of `asset` for the given cause
    ///
    /// The structured [`Breach`] renders the human-readable reason through
    /// `Display`, so adapters choose their own formatting.
    fn trip(&mut self, asset: &AssetId, reason: &Breach) -> bool;
}

/// Source returning the same reading every cycle
///
/// For tests and examples that need a steady-state asset.
#[derive(Debug, Clone)]
pub struct FixedSource {
    reading: SensorReading,
}

impl FixedSource {
    /// Source that always answers with `reading`
    pub fn new(reading: SensorReading) -> Self {
        Self { reading }
    }
}

impl SensorSource for FixedSource {
    fn read(
        &mut self,
        _asset: &AssetId,
        _previous: Option<&SensorReading>,
    ) -> EvalResult<SensorReading> {
        Ok(self.reading)
    }
}

/// Source that replays a scripted sequence of readings, then reports missing
/// data
///
/// Readings are handed out in order across `read` calls regardless of asset,
/// which keeps multi-asset test scripts a single flat list in scan order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<SensorReading>,
    cursor: usize,
}

impl ScriptedSource {
    /// Source that replays `script` front to back
    pub fn new(script: Vec<SensorReading>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Number of scripted readings not yet handed out
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.cursor)
    }
}

impl SensorSource for ScriptedSource {
    fn read(
        &mut self,
        _asset: &AssetId,
        _previous: Option<&SensorReading>,
    ) -> EvalResult<SensorReading> {
        match self.script.get(self.cursor) {
            Some(reading) => {
                self.cursor += 1;
                Ok(*reading)
            }
            None => Err(EvalError::MissingSensorData),
        }
    }
}

/// Actuator that accepts every trip and does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullActuator;

impl ProtectionActuator for NullActuator {
    fn trip(&mut self, _asset: &AssetId, _reason: &Breach) -> bool {
        true
    }
}

/// Actuator that records every trip request for later assertion
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    trips: Vec<(AssetId, Breach)>,
    refuse: bool,
}

impl RecordingActuator {
    /// Recording actuator that accepts every trip
    pub fn new() -> Self {
        Self::default()
    }

    /// Recording actuator that refuses every trip, simulating a failed
    /// actuation path
    pub fn refusing() -> Self {
        Self {
            trips: Vec::new(),
            refuse: true,
        }
    }

    /// Trip requests received so far, in order
    pub fn trips(&self) -> &[(AssetId, Breach)] {
        &self.trips
    }
}

impl ProtectionActuator for RecordingActuator {
    fn trip(&mut self, asset: &AssetId, reason: &Breach) -> bool {
        self.trips.push((*asset, *reason));
        !self.refuse
    }
}
