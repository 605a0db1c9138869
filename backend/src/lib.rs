//! # Fleet Insights
//!
//! Delivery-fleet performance reporting from load exports.
//!
//! A load export is a flat, comma-delimited listing with one row per store
//! stop. Consecutive rows that share a load number make up one load. From
//! those loads the crate derives per-driver statistics and fleet totals, and
//! can optionally ask an external service for a narrative analysis.
//!
//! ## Architecture
//!
//! - [`models`]: `Load`, `StoreStop` and clock-time arithmetic
//! - [`parsing`]: row decoding and the adjacency fold that builds loads
//! - [`services`]: duration estimate, driver aggregation, fleet summary, reports
//! - [`analysis`]: the `FleetAnalyzer` capability and its HTTP implementation
//! - [`config`]: TOML plus environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`api`]: flat re-export of the public types
//!
//! ## Example
//!
//! ```
//! use fleet_insights::services::FleetReport;
//!
//! let export = "1,R1,1,S1,Store A,,2024-05-01,06:00,09:00,,12,40,10,Ann,T1,TR1,06:00\n";
//! let report = FleetReport::from_csv(export);
//! assert_eq!(report.summary.total_loads, 1);
//! assert_eq!(report.drivers[0].driver_name, "Ann");
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
