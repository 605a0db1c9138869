//! Fleet-wide headline figures.

use serde::{Deserialize, Serialize};

use super::drivers::{average_expected_minutes, DriverStats};
use crate::models::Load;

/// Headline totals across the whole export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_loads: usize,
    /// Sum of every driver's `total_kms`.
    pub total_distance_km: f64,
    pub driver_count: usize,
    pub total_pallets: u32,
    /// Mean expected duration over all loads; 0 when there are none.
    pub avg_expected_time_minutes: f64,
}

/// Fold driver stats and the load list into fleet totals.
pub fn summarize_fleet(drivers: &[DriverStats], loads: &[Load]) -> FleetSummary {
    FleetSummary {
        total_loads: loads.len(),
        total_distance_km: drivers.iter().map(|d| d.total_kms).sum(),
        driver_count: drivers.len(),
        total_pallets: drivers
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.total_pallets)),
        avg_expected_time_minutes: average_expected_minutes(loads),
    }
}
