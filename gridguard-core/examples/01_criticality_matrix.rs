//! Criticality Matrix Example
//!
//! This example demonstrates the static half of GridGuard: scoring a small
//! substation inventory into MCVD indices.
//!
//! ## What You'll Learn
//!
//! - Building asset records for a fleet
//! - Normalizing operator criteria weights
//! - Batch evaluation with per-asset error handling
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_criticality_matrix
//! ```

use gridguard_core::{
    AgingCurve, AssetId, AssetRecord, CriticalityCalculator, WeightConfig,
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

fn main() {
    println!("GridGuard Criticality Matrix Example");
    println!("====================================\n");

    // A small LV/MV distribution inventory: intake, transformer, main board,
    // UPS (redundant), server rack, air compressor
    let fleet = [
        asset("ACOMETIDA", 2010, 40.0, (10.0, 10.0, 5.0), 1.0),
        asset("TR-01", 1995, 30.0, (9.0, 10.0, 5.0), 1.0),
        asset("CGBT", 2000, 30.0, (8.0, 10.0, 2.0), 1.0),
        asset("SAI-01", 2023, 10.0, (2.0, 9.0, 1.0), 2.0),
        asset("SRV-RACK", 2020, 10.0, (1.0, 9.0, 0.0), 1.0),
        asset("MOTOR-01", 2005, 15.0, (4.0, 7.0, 3.0), 1.0),
    ];

    // Safety-led weighting, normalized from raw slider positions
    let weights = WeightConfig::new(0.6, 0.3, 0.1).expect("weights sum above zero");
    println!(
        "Weights: safety {:.2}, operational {:.2}, environmental {:.2}\n",
        weights.w_safety(),
        weights.w_operational(),
        weights.w_environmental()
    );

    let calculator = CriticalityCalculator::new(AgingCurve::default(), 2025);
    let results = calculator.evaluate(&fleet, &weights);

    // Sort for display only - the batch itself stays in input order
    let mut rows: Vec<_> = fleet.iter().zip(results.iter()).collect();
    rows.sort_by(|a, b| {
        let index = |r: &Result<gridguard_core::CriticalityResult, _>| {
            r.as_ref().map(|ok| ok.mcvd_index).unwrap_or(f32::MIN)
        };
        index(b.1).partial_cmp(&index(a.1)).expect("indices are finite")
    });

    println!(
        "{:<10} {:>7} {:>8} {:>10}",
        "asset", "aging", "impact", "MCVD"
    );
    for (record, result) in rows {
        match result {
            Ok(result) => println!(
                "{:<10} {:>7.3} {:>8.2} {:>10.2}",
                record.id, result.aging_factor, result.impact_score, result.mcvd_index
            ),
            Err(e) => println!("{:<10} configuration fault: {}", record.id, e),
        }
    }
}
