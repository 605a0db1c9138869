//! Service layer: derivations over parsed loads.
//!
//! Everything here is synchronous and pure. The HTTP layer and the analyzer
//! only ever see the types produced by these functions.

pub mod checksum;

pub mod drivers;

pub mod duration;

pub mod report;

pub mod summary;


pub use checksum::export_checksum;
pub use drivers::{aggregate_drivers, DriverStats};
pub use duration::expected_duration;
pub use report::FleetReport;
pub use summary::{summarize_fleet, FleetSummary};
