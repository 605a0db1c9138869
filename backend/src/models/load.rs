//! Delivery load records reconstructed from the row export.

use serde::{Deserialize, Serialize};

use super::time::to_minutes_of_day;

/// One delivery stop within a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStop {
    /// Position of the stop inside its load's row block.
    pub stop_no: u32,
    pub store_no: String,
    pub store_name: String,
    /// Kilometres travelled from the previous point.
    pub distance: f64,
    /// Kilometres back to the depot recorded on this row.
    pub return_leg: f64,
    pub window_start: String,
    pub window_end: String,
}

/// One dispatched run: a truck leaving the depot and serving one or more stops.
///
/// A `Load` only exists once its row block has been fully consumed, so
/// `expected_time_minutes` is always final. The in-progress state lives in
/// [`crate::parsing::csv_parser::LoadBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    pub load_no: String,
    pub route_no: String,
    pub driver: String,
    pub truck: String,
    pub trailer: String,
    /// Clock time the load leaves the depot (`H:MM`).
    pub despatch_time: String,
    pub date: String,
    pub stops: Vec<StoreStop>,
    pub total_pallets: u32,
    /// Sum of every stop's `distance`.
    pub total_distance: f64,
    /// Return leg recorded on the last row of the block.
    pub total_return_leg: f64,
    pub expected_time_minutes: i64,
}

impl Load {
    /// Outbound distance plus the final return leg.
    pub fn total_km(&self) -> f64 {
        self.total_distance + self.total_return_leg
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Despatch time as minutes since midnight.
    pub fn despatch_minutes(&self) -> i64 {
        to_minutes_of_day(&self.despatch_time)
    }
}
