//! Benchmarks for batch scoring and classification
//!
//! The scan cycle runs on gateway-class hardware; both halves of the engine
//! should stay comfortably sub-microsecond per asset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridguard_core::{
    AgingCurve, AssetId, AssetRecord, CriticalityCalculator, CriticalityResult, SensorReading,
    ThresholdConfig, ThresholdEvaluator, WeightConfig,
};

fn fleet() -> Vec<AssetRecord> {
    (0..64)
        .map(|i| AssetRecord {
            id: AssetId::new("ASSET").unwrap(),
            install_year: 1980 + (i % 45),
            useful_life_years: 10.0 + (i % 30) as f32,
            safety_score: (i % 11) as f32,
            operational_score: ((i * 3) % 11) as f32,
            environmental_score: ((i * 7) % 11) as f32,
            redundancy_factor: 1.0 + (i % 2) as f32,
        })
        .collect()
}

fn batch_evaluation(c: &mut Criterion) {
    let calculator = CriticalityCalculator::new(AgingCurve::default(), 2025);
    let weights = WeightConfig::default();
    let assets = fleet();

    c.bench_function("evaluate_64_assets", |b| {
        b.iter(|| calculator.evaluate(black_box(&assets), black_box(&weights)))
    });
}

fn classification(c: &mut Criterion) {
    let evaluator = ThresholdEvaluator::new(ThresholdConfig::default());
    let result = CriticalityResult {
        aging_factor: 0.2,
        impact_score: 8.9,
        mcvd_index: 10.68,
    };
    let reading = SensorReading {
        oil_temp_c: 80.0,
        vibration_mm_s: 3.0,
        load_pct: 70.0,
    };

    c.bench_function("classify_reading", |b| {
        b.iter(|| evaluator.classify(black_box(&result), black_box(&reading)))
    });
}

criterion_group!(benches, batch_evaluation, classification);
criterion_main!(benches);
