//! The complete result handed to a presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::checksum::export_checksum;
use super::drivers::{aggregate_drivers, DriverStats};
use super::summary::{summarize_fleet, FleetSummary};
use crate::analysis::DriverDigest;
use crate::models::Load;
use crate::parsing::parse_loads;

/// Loads, per-driver stats and fleet totals for one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetReport {
    pub loads: Vec<Load>,
    pub drivers: Vec<DriverStats>,
    pub summary: FleetSummary,
    /// Hex SHA-256 of the source text.
    pub checksum: String,
    pub generated_at: DateTime<Utc>,
}

impl FleetReport {
    /// Run the full parse → aggregate → summarize pipeline over raw export text.
    pub fn from_csv(raw: &str) -> Self {
        let checksum = export_checksum(raw);
        let loads = parse_loads(raw);
        let report = Self::from_loads(loads, checksum);
        info!(
            loads = report.summary.total_loads,
            drivers = report.summary.driver_count,
            total_km = report.summary.total_distance_km,
            checksum = %report.checksum,
            "built fleet report"
        );
        report
    }

    /// Build a report from already-parsed loads.
    pub fn from_loads(loads: Vec<Load>, checksum: String) -> Self {
        let drivers = aggregate_drivers(&loads);
        let summary = summarize_fleet(&drivers, &loads);
        Self {
            loads,
            drivers,
            summary,
            checksum,
            generated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Per-driver payload sent to the fleet analyzer.
    pub fn digests(&self) -> Vec<DriverDigest> {
        self.drivers.iter().map(DriverDigest::from).collect()
    }
}
