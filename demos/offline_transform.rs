//! demos/offline_transform.rs
//!
//! Runs the transform on hand-written rows, without touching the network.
//!
//! To run this example:
//! cargo run --example offline_transform

use climate_risk::{transform, AssetRiskReport, MonthlyRecord, QueryParams, Scenario};

fn main() -> Result<(), serde_json::Error> {
    let historical: Vec<_> = (1..=12)
        .map(|m| {
            let seasonal = 8.0 + 6.0 * ((m as f64 - 7.0) * std::f64::consts::PI / 6.0).cos();
            MonthlyRecord::historical(m, seasonal, 1.2)
        })
        .collect();
    let projected: Vec<_> = historical
        .iter()
        .filter(|r| r.month != 12)
        .map(|r| MonthlyRecord::projected(r.month, r.avg.unwrap_or_default() + 2.4, 30))
        .collect();

    let report = AssetRiskReport::new(
        QueryParams::new(2070, Scenario::Rcp85),
        transform(&historical, &projected),
    );

    println!("{}", report.sentence());
    println!("{}", serde_json::to_string_pretty(&report.data)?);
    Ok(())
}
