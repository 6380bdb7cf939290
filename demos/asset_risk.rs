//! demos/asset_risk.rs
//!
//! Fetches the projection for a year and scenario from the public signals
//! service and prints the summary sentence and chart rows.
//!
//! To run this example:
//! cargo run --example asset_risk -- 2050 rcp8.5

use climate_risk::{celsius_tick_label, month_tick_label, ClimateRisk, Scenario};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let year: i32 = args.next().as_deref().unwrap_or("2050").parse()?;
    let scenario: Scenario = args.next().as_deref().unwrap_or("rcp4.5").parse()?;

    let client = ClimateRisk::with_default_cache().await?;
    let report = client
        .asset_risk()
        .year(year)
        .scenario(scenario)
        .call()
        .await?;

    println!("{}\n", report.sentence());
    println!("{:>5} {:>10} {:>10} {:>10}", "month", "avg", "band", "rcp");
    for point in &report.data.chart_data {
        let band = match (point.lower_stddev, point.upper_stddev) {
            (Some(lo), Some(hi)) => format!("{:.1}..{:.1}", lo, hi),
            _ => "-".to_string(),
        };
        println!(
            "{:>5} {:>10} {:>10} {:>10}",
            month_tick_label(point.month).unwrap_or("?"),
            point
                .avg
                .map(|v| celsius_tick_label((v * 10.0).round() / 10.0))
                .unwrap_or_default(),
            band,
            point
                .rcp
                .map(|v| celsius_tick_label((v * 10.0).round() / 10.0))
                .unwrap_or_default(),
        );
    }

    Ok(())
}
