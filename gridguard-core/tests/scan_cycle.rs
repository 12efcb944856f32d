//! Integration tests for the full scan-cycle flow
//!
//! Scores a small fleet, feeds scripted readings through the threshold
//! evaluator, and checks statuses, actuation, and partial-failure semantics
//! end to end.

use gridguard_core::{
    traits::{FixedSource, RecordingActuator, ScriptedSource},
    AgingCurve, AssetId, AssetRecord, AssetStatus, Breach, CriticalityCalculator, EvalError,
    SensorReading, ThresholdConfig, ThresholdEvaluator, WeightConfig,
};

fn asset(
    id: &str,
    install_year: i32,
    useful_life_years: f32,
    scores: (f32, f32, f32),
    redundancy_factor: f32,
) -> AssetRecord {
    AssetRecord {
        id: AssetId::new(id).unwrap(),
        install_year,
        useful_life_years,
        safety_score: scores.0,
        operational_score: scores.1,
        environmental_score: scores.2,
        redundancy_factor,
    }
}

fn reading(oil_temp_c: f32, vibration_mm_s: f32) -> SensorReading {
    SensorReading {
        oil_temp_c,
        vibration_mm_s,
        load_pct: 70.0,
    }
}

/// The reference substation inventory used across these tests
fn fleet() -> Vec<AssetRecord> {
    vec![
        asset("ACOMETIDA", 2010, 40.0, (10.0, 10.0, 5.0), 1.0),
        asset("TR-01", 1995, 30.0, (9.0, 10.0, 5.0), 1.0),
        asset("CGBT", 2000, 30.0, (8.0, 10.0, 2.0), 1.0),
        asset("SAI-01", 2023, 10.0, (2.0, 9.0, 1.0), 2.0),
        asset("SRV-RACK", 2020, 10.0, (1.0, 9.0, 0.0), 1.0),
        asset("MOTOR-01", 2005, 15.0, (4.0, 7.0, 3.0), 1.0),
    ]
}

fn scored_fleet() -> (Vec<AssetRecord>, Vec<Result<gridguard_core::CriticalityResult, EvalError>>) {
    let assets = fleet();
    let calculator = CriticalityCalculator::new(AgingCurve::default(), 2025);
    let weights = WeightConfig::new(0.6, 0.3, 0.1).unwrap();
    let scores = calculator.evaluate(&assets, &weights);
    (assets, scores)
}

#[test]
fn mixed_fleet_classifies_per_asset() {
    let (assets, scores) = scored_fleet();
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());

    // One reading per asset in scan order; MOTOR-01 gets none (script runs dry)
    let mut source = ScriptedSource::new(vec![
        reading(60.0, 2.0), // ACOMETIDA: cool and quiet
        reading(80.0, 1.0), // TR-01: hot -> temperature trip (limit 73.3)
        reading(70.0, 5.0), // CGBT: vibration above its ~4.75 limit
        reading(85.0, 2.0), // SAI-01: warning band (alarm ~80.8, trip 95)
        reading(70.0, 1.0), // SRV-RACK: nominal
    ]);
    let mut actuator = RecordingActuator::new();

    let outcomes = evaluator.scan_cycle(&assets, &scores, &mut source, &mut actuator, |_| None);

    assert_eq!(outcomes.len(), 6);
    let statuses: Vec<AssetStatus> = outcomes
        .iter()
        .map(|o| o.as_ref().unwrap().evaluation.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            AssetStatus::Normal,
            AssetStatus::Trip,
            AssetStatus::Trip,
            AssetStatus::Alarm,
            AssetStatus::Normal,
            AssetStatus::Unknown,
        ]
    );

    // The starved asset has no reading but well-defined limits
    let motor = outcomes[5].as_ref().unwrap();
    assert!(motor.reading.is_none());
    assert!(motor.evaluation.trip_limit_temp_c > 0.0);
    assert!(!motor.evaluation.action_required);
}

#[test]
fn actuator_fires_exactly_once_per_tripped_asset() {
    let (assets, scores) = scored_fleet();
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());

    let mut source = ScriptedSource::new(vec![
        reading(60.0, 2.0),
        reading(80.0, 1.0),
        reading(70.0, 5.0),
        reading(85.0, 2.0),
        reading(70.0, 1.0),
    ]);
    let mut actuator = RecordingActuator::new();

    let outcomes = evaluator.scan_cycle(&assets, &scores, &mut source, &mut actuator, |_| None);

    // Two trips: TR-01 on temperature, CGBT on vibration - and nothing else
    let trips = actuator.trips();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].0.as_str(), "TR-01");
    assert!(matches!(trips[0].1, Breach::Temperature { .. }));
    assert_eq!(trips[1].0.as_str(), "CGBT");
    assert!(matches!(trips[1].1, Breach::Vibration { .. }));

    // Tripped outcomes record a successful actuation, others none
    assert_eq!(outcomes[1].as_ref().unwrap().actuated, Some(true));
    assert_eq!(outcomes[2].as_ref().unwrap().actuated, Some(true));
    assert_eq!(outcomes[0].as_ref().unwrap().actuated, None);
    assert_eq!(outcomes[3].as_ref().unwrap().actuated, None);
}

#[test]
fn trip_message_cites_measured_value_and_limit() {
    let (assets, scores) = scored_fleet();
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());

    let mut source = ScriptedSource::new(vec![
        reading(60.0, 2.0),
        reading(80.0, 1.0),
    ]);
    let mut actuator = RecordingActuator::new();

    let outcomes =
        evaluator.scan_cycle(&assets[..2], &scores[..2], &mut source, &mut actuator, |_| None);

    let message = outcomes[1].as_ref().unwrap().evaluation.to_string();
    assert!(message.contains("80.0"), "message was: {message}");
    assert!(message.contains("73.3"), "message was: {message}");
}

#[test]
fn refused_actuation_does_not_block_the_batch() {
    let (assets, scores) = scored_fleet();
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());

    // Everything runs far too hot: every scored asset trips
    let mut source = FixedSource::new(reading(150.0, 1.0));
    let mut actuator = RecordingActuator::refusing();

    let outcomes = evaluator.scan_cycle(&assets, &scores, &mut source, &mut actuator, |_| None);

    assert_eq!(actuator.trips().len(), 6);
    for outcome in &outcomes {
        let outcome = outcome.as_ref().unwrap();
        // Classification stands even though the actuator refused
        assert_eq!(outcome.evaluation.status, AssetStatus::Trip);
        assert_eq!(outcome.actuated, Some(false));
    }
}

#[test]
fn malformed_asset_degrades_only_its_own_row() {
    let assets = vec![
        asset("OK-1", 2010, 40.0, (5.0, 5.0, 5.0), 1.0),
        asset("BAD", 2010, 0.0, (5.0, 5.0, 5.0), 1.0),
        asset("OK-2", 2020, 10.0, (5.0, 5.0, 5.0), 1.0),
    ];
    let calculator = CriticalityCalculator::new(AgingCurve::default(), 2025);
    let scores = calculator.evaluate(&assets, &WeightConfig::default());
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());

    // Two readings: the faulted asset consumes none from the script
    let mut source = ScriptedSource::new(vec![reading(40.0, 1.0), reading(40.0, 1.0)]);
    let mut actuator = RecordingActuator::new();

    let outcomes = evaluator.scan_cycle(&assets, &scores, &mut source, &mut actuator, |_| None);

    assert!(outcomes[0].is_ok());
    assert_eq!(
        outcomes[1],
        Err(EvalError::NonPositiveUsefulLife { years: 0.0 })
    );
    assert!(outcomes[2].is_ok());
    assert_eq!(outcomes[2].as_ref().unwrap().evaluation.status, AssetStatus::Normal);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn scan_cycle_is_deterministic() {
    let (assets, scores) = scored_fleet();
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());
    let script = vec![
        reading(60.0, 2.0),
        reading(80.0, 1.0),
        reading(70.0, 5.0),
        reading(85.0, 2.0),
        reading(70.0, 1.0),
    ];

    let run = |script: Vec<SensorReading>| {
        let mut source = ScriptedSource::new(script);
        let mut actuator = RecordingActuator::new();
        evaluator.scan_cycle(&assets, &scores, &mut source, &mut actuator, |_| None)
    };

    assert_eq!(run(script.clone()), run(script));
}

#[test]
fn previous_reading_reaches_the_source() {
    struct EchoPrevious {
        saw_previous: bool,
    }

    impl gridguard_core::SensorSource for EchoPrevious {
        fn read(
            &mut self,
            _asset: &AssetId,
            previous: Option<&SensorReading>,
        ) -> Result<SensorReading, EvalError> {
            self.saw_previous = previous.is_some();
            // Smooth toward the previous sample when one exists
            Ok(previous.copied().unwrap_or(reading(50.0, 1.0)))
        }
    }

    let (assets, scores) = scored_fleet();
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());
    let mut source = EchoPrevious { saw_previous: false };
    let mut actuator = RecordingActuator::new();

    let last_cycle = reading(55.0, 1.5);
    let outcomes = evaluator.scan_cycle(
        &assets[..1],
        &scores[..1],
        &mut source,
        &mut actuator,
        |_| Some(last_cycle),
    );

    assert!(source.saw_previous);
    assert_eq!(outcomes[0].as_ref().unwrap().reading, Some(last_cycle));
}
