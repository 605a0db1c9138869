//! Fixed-arity decoding of one export row.
//!
//! All knowledge of column positions lives here. A row is split on literal
//! commas (no quoting), every field is trimmed, and each named field is read
//! from its column with an explicit default when the column is missing or
//! malformed.

use crate::models::StoreStop;

/// Column positions in the export (0-indexed).
pub mod columns {
    pub const LOAD_NO: usize = 0;
    pub const ROUTE_NO: usize = 1;
    pub const STOP_NO: usize = 2;
    pub const STORE_NO: usize = 3;
    pub const STORE_NAME: usize = 4;
    pub const DATE: usize = 6;
    pub const WINDOW_START: usize = 7;
    pub const WINDOW_END: usize = 8;
    pub const PALLETS: usize = 10;
    pub const DISTANCE: usize = 11;
    pub const RETURN_LEG: usize = 12;
    pub const DRIVER: usize = 13;
    pub const TRUCK: usize = 14;
    pub const TRAILER: usize = 15;
    pub const DESPATCH_TIME: usize = 16;

    /// Number of columns a complete row carries.
    pub const EXPECTED: usize = 17;
}

/// Driver recorded when the export leaves the column blank.
pub const UNKNOWN_DRIVER: &str = "UNKNOWN";

/// One decoded data row.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRow {
    pub load_no: String,
    pub route_no: String,
    pub stop_no: u32,
    pub store_no: String,
    pub store_name: String,
    pub date: String,
    pub window_start: String,
    pub window_end: String,
    pub pallets: u32,
    pub distance: f64,
    pub return_leg: f64,
    pub driver: String,
    pub truck: String,
    pub trailer: String,
    pub despatch_time: String,
}

impl LoadRow {
    /// Split and decode a raw line. Returns `None` for non-data lines.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        Self::from_fields(&fields)
    }

    /// Decode already-split, trimmed fields.
    ///
    /// A line is data only when its first field is a number; headers, blank
    /// lines and comments fall out here without any explicit detection.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let load_no = text(fields, columns::LOAD_NO);
        if !is_numeric(&load_no) {
            return None;
        }

        let driver = match text(fields, columns::DRIVER) {
            name if name.is_empty() => UNKNOWN_DRIVER.to_string(),
            name => name,
        };

        Some(Self {
            load_no,
            route_no: text(fields, columns::ROUTE_NO),
            stop_no: count(fields, columns::STOP_NO),
            store_no: text(fields, columns::STORE_NO),
            store_name: text(fields, columns::STORE_NAME),
            date: text(fields, columns::DATE),
            window_start: text(fields, columns::WINDOW_START),
            window_end: text(fields, columns::WINDOW_END),
            pallets: count(fields, columns::PALLETS),
            distance: kilometres(fields, columns::DISTANCE),
            return_leg: kilometres(fields, columns::RETURN_LEG),
            driver,
            truck: text(fields, columns::TRUCK),
            trailer: text(fields, columns::TRAILER),
            despatch_time: text(fields, columns::DESPATCH_TIME),
        })
    }

    /// The stop this row describes.
    pub fn to_stop(&self) -> StoreStop {
        StoreStop {
            stop_no: self.stop_no,
            store_no: self.store_no.clone(),
            store_name: self.store_name.clone(),
            distance: self.distance,
            return_leg: self.return_leg,
            window_start: self.window_start.clone(),
            window_end: self.window_end.clone(),
        }
    }
}

fn text(fields: &[&str], index: usize) -> String {
    fields.get(index).map(|f| f.to_string()).unwrap_or_default()
}

fn is_numeric(raw: &str) -> bool {
    !raw.is_empty() && raw.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

/// Non-negative finite decimal, 0 otherwise.
fn kilometres(fields: &[&str], index: usize) -> f64 {
    fields
        .get(index)
        .and_then(|f| f.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Whole count; decimals are rounded, anything negative or unparsable is 0.
fn count(fields: &[&str], index: usize) -> u32 {
    let Some(raw) = fields.get(index) else {
        return 0;
    };
    if let Ok(value) = raw.parse::<u32>() {
        return value;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}
