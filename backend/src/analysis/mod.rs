//! Optional narrative analysis of driver performance.
//!
//! The report pipeline hands [`DriverDigest`]s to a [`FleetAnalyzer`] and gets
//! back an [`AnalysisResult`]. Any failure leaves the report untouched and the
//! analysis absent.

pub mod analyzer;
pub mod error;
pub mod http;
pub mod prompt;
pub mod types;

pub use analyzer::{analyze_best_effort, run_analysis, FleetAnalyzer};
pub use error::AnalysisError;
pub use http::{decode_analysis, HttpFleetAnalyzer};
pub use prompt::build_prompt;
pub use types::{AnalysisOutcome, AnalysisResult, DriverDigest};
