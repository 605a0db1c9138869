//! Print a fleet report for a load export.
//!
//! ```bash
//! cargo run --example fleet_report -- path/to/export.csv
//!
//! # With narrative analysis
//! ANALYZER_ENABLED=true ANALYZER_ENDPOINT=http://localhost:7000/analyze \
//!   cargo run --example fleet_report -- path/to/export.csv
//! ```
//!
//! Without a path the bundled test fixture is used.

use std::path::PathBuf;

use anyhow::Context;
use fleet_insights::analysis::{analyze_best_effort, HttpFleetAnalyzer};
use fleet_insights::config::AppConfig;
use fleet_insights::services::FleetReport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/loads_export.csv")
        });

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let report = FleetReport::from_csv(&raw);

    println!("=== Fleet Report: {} ===\n", path.display());
    println!("Checksum:  {}", report.checksum);
    println!("Loads:     {}", report.summary.total_loads);
    println!("Drivers:   {}", report.summary.driver_count);
    println!("Pallets:   {}", report.summary.total_pallets);
    println!("Distance:  {:.1} km", report.summary.total_distance_km);
    println!(
        "Avg load:  {:.1} min expected\n",
        report.summary.avg_expected_time_minutes
    );

    println!(
        "{:<20} {:>6} {:>10} {:>8} {:>10} {:>10}",
        "Driver", "Loads", "Km", "Pallets", "Gap (min)", "Exp (min)"
    );
    for driver in &report.drivers {
        println!(
            "{:<20} {:>6} {:>10.1} {:>8} {:>10} {:>10.1}",
            driver.driver_name,
            driver.load_count(),
            driver.total_kms,
            driver.total_pallets,
            driver.avg_time_between_loads_minutes,
            driver.avg_expected_time_minutes,
        );
    }

    let config = AppConfig::load()?;
    if !config.analyzer.is_active() {
        return Ok(());
    }

    let analyzer = HttpFleetAnalyzer::new(&config.analyzer)?;
    match analyze_best_effort(&analyzer, &report.digests()).await {
        Some(analysis) => {
            println!("\n=== Analysis (score {:.0}) ===", analysis.efficiency_score);
            println!("{}", analysis.summary);
            for item in &analysis.bottlenecks {
                println!("  bottleneck: {item}");
            }
            for item in &analysis.recommendations {
                println!("  recommendation: {item}");
            }
        }
        None => println!("\nAnalysis unavailable."),
    }

    Ok(())
}
