//! Scan Cycle Example
//!
//! This example runs one full protection cycle: score the fleet, read each
//! asset's sensors, classify against index-derived limits, and fire the
//! actuator for tripped assets. Readings come from a deterministic scripted
//! source so the output is reproducible.
//!
//! ## What You'll Learn
//!
//! - Deriving adaptive trip/alarm limits from the MCVD index
//! - Running a scan cycle over a fleet with an actuator boundary
//! - Keeping a caller-owned rolling history for trend display
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_scan_cycle
//! ```

use std::collections::HashMap;

use gridguard_core::{
    constants::SCAN_HISTORY_DEPTH,
    history::ReadingHistory,
    traits::{RecordingActuator, ScriptedSource},
    AgingCurve, AssetId, AssetRecord, CriticalityCalculator, SensorReading, ThresholdConfig,
    ThresholdEvaluator, WeightConfig,
};

fn asset(
    id: &str,
    install_year: i32,
    useful_life_years: f32,
    scores: (f32, f32, f32),
    redundancy_factor: f32,
) -> AssetRecord {
    AssetRecord {
        id: AssetId::new(id).expect("id fits inline"),
        install_year,
        useful_life_years,
        safety_score: scores.0,
        operational_score: scores.1,
        environmental_score: scores.2,
        redundancy_factor,
    }
}

fn reading(oil_temp_c: f32, vibration_mm_s: f32, load_pct: f32) -> SensorReading {
    SensorReading {
        oil_temp_c,
        vibration_mm_s,
        load_pct,
    }
}

fn main() {
    println!("GridGuard Scan Cycle Example");
    println!("============================\n");

    let fleet = [
        asset("TR-01", 1995, 30.0, (9.0, 10.0, 5.0), 1.0),
        asset("SAI-01", 2023, 10.0, (2.0, 9.0, 1.0), 2.0),
        asset("MOTOR-01", 2005, 15.0, (4.0, 7.0, 3.0), 1.0),
    ];

    let calculator = CriticalityCalculator::new(AgingCurve::default(), 2025);
    let weights = WeightConfig::default();
    let scores = calculator.evaluate(&fleet, &weights);

    // One scripted reading per asset, in scan order: the transformer runs hot,
    // the UPS idles, the motor shakes
    let mut source = ScriptedSource::new(vec![
        reading(82.0, 2.5, 85.0),
        reading(35.0, 1.0, 40.0),
        reading(55.0, 9.5, 75.0),
    ]);
    let mut actuator = RecordingActuator::new();

    // Rolling trend windows, one per asset, owned here - not by the engine
    let mut histories: HashMap<AssetId, ReadingHistory<SCAN_HISTORY_DEPTH>> = fleet
        .iter()
        .map(|record| (record.id, ReadingHistory::new()))
        .collect();

    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());
    let outcomes = evaluator.scan_cycle(&fleet, &scores, &mut source, &mut actuator, |id| {
        histories.get(id).and_then(|h| h.last()).map(|sample| reading(
            sample.oil_temp_c,
            sample.vibration_mm_s,
            0.0,
        ))
    });

    println!(
        "{:<10} {:>8} {:>10} {:>10}  {}",
        "asset", "status", "temp lim", "vib lim", "message"
    );
    for (record, outcome) in fleet.iter().zip(outcomes.iter()) {
        match outcome {
            Ok(outcome) => {
                println!(
                    "{:<10} {:>8} {:>10.1} {:>10.2}  {}",
                    record.id,
                    outcome.evaluation.status.name(),
                    outcome.evaluation.trip_limit_temp_c,
                    outcome.evaluation.trip_limit_vibration_mm_s,
                    outcome.evaluation
                );

                // Feed the trend window for the next cycle
                if let Some(sample) = outcome.reading {
                    if let Some(history) = histories.get_mut(&record.id) {
                        history.record(
                            0,
                            &sample,
                            &gridguard_core::TripLimits {
                                temp_c: outcome.evaluation.trip_limit_temp_c,
                                vibration_mm_s: outcome.evaluation.trip_limit_vibration_mm_s,
                                alarm_temp_c: outcome.evaluation.alarm_limit_temp_c,
                            },
                        );
                    }
                }
            }
            Err(e) => println!("{:<10} {:>8}  {}", record.id, "ERROR", e),
        }
    }

    println!("\nProtective actions this cycle:");
    if actuator.trips().is_empty() {
        println!("  none - system stable");
    } else {
        for (id, breach) in actuator.trips() {
            println!("  {} tripped: {}", id, breach);
        }
    }
}
