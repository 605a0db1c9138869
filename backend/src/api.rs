//! Public API surface.
//!
//! Consolidates the types a presentation layer works with. The data records
//! (loads, stops, driver stats, summaries, reports, digests, analysis results
//! and settings) derive Serialize/Deserialize; the analyzer trait and the error
//! enums do not.

pub use crate::analysis::{AnalysisError, AnalysisOutcome, AnalysisResult, DriverDigest, FleetAnalyzer};
pub use crate::config::{AnalyzerSettings, AppConfig, ConfigError, ServerSettings};
pub use crate::models::{Load, StoreStop};
pub use crate::services::{DriverStats, FleetReport, FleetSummary};
