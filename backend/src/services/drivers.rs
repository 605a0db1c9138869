//! Per-driver rollups over finished loads.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{minutes_between, Load};

/// Aggregate over every load one driver ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStats {
    pub driver_name: String,
    /// Loads ordered by despatch time (ties keep export order).
    pub loads: Vec<Load>,
    /// Sum of each load's distance plus return leg.
    pub total_kms: f64,
    pub total_pallets: u32,
    /// Rounded mean gap between consecutive despatch times; 0 below two loads.
    pub avg_time_between_loads_minutes: i64,
    /// Mean expected duration over the driver's loads; 0 when there are none.
    pub avg_expected_time_minutes: f64,
}

impl DriverStats {
    pub fn load_count(&self) -> usize {
        self.loads.len()
    }

    /// Route numbers in despatch order.
    pub fn route_numbers(&self) -> Vec<String> {
        self.loads.iter().map(|load| load.route_no.clone()).collect()
    }
}

/// Group loads by driver and compute each driver's stats.
///
/// Drivers are matched on the exact driver string. The result is ordered by
/// `total_kms`, highest first; drivers with equal distance keep the order in
/// which they first appear in `loads`.
pub fn aggregate_drivers(loads: &[Load]) -> Vec<DriverStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Load>, f64, u32)> = Vec::new();

    for load in loads {
        let slot = *index.entry(load.driver.as_str()).or_insert_with(|| {
            groups.push((load.driver.clone(), Vec::new(), 0.0, 0));
            groups.len() - 1
        });
        let (_, driver_loads, kms, pallets) = &mut groups[slot];
        driver_loads.push(load.clone());
        *kms += load.total_km();
        *pallets = pallets.saturating_add(load.total_pallets);
    }

    let mut stats: Vec<DriverStats> = groups
        .into_iter()
        .map(|(driver_name, mut driver_loads, total_kms, total_pallets)| {
            // sort_by_key is stable, equal despatch times keep export order
            driver_loads.sort_by_key(Load::despatch_minutes);
            DriverStats {
                avg_time_between_loads_minutes: average_gap_minutes(&driver_loads),
                avg_expected_time_minutes: average_expected_minutes(&driver_loads),
                driver_name,
                loads: driver_loads,
                total_kms,
                total_pallets,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.total_kms
            .partial_cmp(&a.total_kms)
            .unwrap_or(Ordering::Equal)
    });
    stats
}

/// Rounded mean of the gaps between consecutive loads (already sorted).
pub(crate) fn average_gap_minutes(sorted: &[Load]) -> i64 {
    if sorted.len() < 2 {
        return 0;
    }
    let total = sorted
        .windows(2)
        .map(|pair| minutes_between(&pair[0].despatch_time, &pair[1].despatch_time))
        .fold(0i64, i64::saturating_add);
    (total as f64 / (sorted.len() - 1) as f64).round() as i64
}

/// Mean expected duration, 0 for an empty slice.
pub(crate) fn average_expected_minutes(loads: &[Load]) -> f64 {
    if loads.is_empty() {
        return 0.0;
    }
    let total: f64 = loads
        .iter()
        .map(|load| load.expected_time_minutes as f64)
        .sum();
    total / loads.len() as f64
}
