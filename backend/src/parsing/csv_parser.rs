use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::{Load, StoreStop};
use crate::parsing::row::{columns, LoadRow};
use crate::services::duration::expected_duration;

/// A load whose row block is still being read.
///
/// Scalar descriptors come from the first row only; later rows contribute
/// stops, pallets and distance, and overwrite the return leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadBuilder {
    load_no: String,
    route_no: String,
    driver: String,
    truck: String,
    trailer: String,
    despatch_time: String,
    date: String,
    stops: Vec<StoreStop>,
    total_pallets: u32,
    total_distance: f64,
    total_return_leg: f64,
}

impl LoadBuilder {
    /// Start a load from the first row of its block.
    pub fn start(row: LoadRow) -> Self {
        let stop = row.to_stop();
        Self {
            total_pallets: row.pallets,
            total_distance: row.distance,
            total_return_leg: row.return_leg,
            stops: vec![stop],
            load_no: row.load_no,
            route_no: row.route_no,
            driver: row.driver,
            truck: row.truck,
            trailer: row.trailer,
            despatch_time: row.despatch_time,
            date: row.date,
        }
    }

    pub fn load_no(&self) -> &str {
        &self.load_no
    }

    /// Fold a follow-on row of the same block into this load.
    pub fn extend(&mut self, row: &LoadRow) {
        self.stops.push(row.to_stop());
        self.total_pallets = self.total_pallets.saturating_add(row.pallets);
        self.total_distance += row.distance;
        self.total_return_leg = row.return_leg;
    }

    /// Seal the load and compute its expected duration.
    pub fn finish(self) -> Load {
        let expected_time_minutes =
            expected_duration(self.total_distance + self.total_return_leg, self.stops.len());
        Load {
            load_no: self.load_no,
            route_no: self.route_no,
            driver: self.driver,
            truck: self.truck,
            trailer: self.trailer,
            despatch_time: self.despatch_time,
            date: self.date,
            stops: self.stops,
            total_pallets: self.total_pallets,
            total_distance: self.total_distance,
            total_return_leg: self.total_return_leg,
            expected_time_minutes,
        }
    }
}

/// Fold state for the row scan: finished loads plus at most one open block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadAccumulator {
    finished: Vec<Load>,
    current: Option<LoadBuilder>,
}

impl LoadAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition on one data row.
    ///
    /// Grouping is by adjacency: a row continues the open load only when its
    /// load id equals the open load's id. A load id that reappears after a
    /// different one starts a second, separate load.
    pub fn push(mut self, row: LoadRow) -> Self {
        match self.current.take() {
            Some(mut open) if open.load_no() == row.load_no => {
                open.extend(&row);
                self.current = Some(open);
            }
            Some(open) => {
                self.finished.push(open.finish());
                self.current = Some(LoadBuilder::start(row));
            }
            None => {
                self.current = Some(LoadBuilder::start(row));
            }
        }
        self
    }

    /// Flush the open block, if any, and return every load in row order.
    pub fn finish(mut self) -> Vec<Load> {
        if let Some(open) = self.current.take() {
            self.finished.push(open.finish());
        }
        self.finished
    }
}

/// Parse a raw export into loads.
///
/// Lines whose first field is not numeric are skipped. Parsing never fails:
/// malformed values fall back to their defaults.
pub fn parse_loads(raw: &str) -> Vec<Load> {
    raw.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let row = LoadRow::from_fields(&fields)?;
            if fields.len() < columns::EXPECTED {
                debug!(
                    load_no = %row.load_no,
                    columns = fields.len(),
                    "short export row, missing columns defaulted"
                );
            }
            Some(row)
        })
        .fold(LoadAccumulator::new(), LoadAccumulator::push)
        .finish()
}

/// Read an export file from disk and parse it.
pub fn parse_loads_file(path: &Path) -> Result<Vec<Load>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read load export {}", path.display()))?;
    Ok(parse_loads(&raw))
}
