//! Response bodies for the HTTP API.
//!
//! Reports themselves are served as [`FleetReport`] directly.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
pub use crate::services::FleetReport;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Crate version
    pub version: String,
    /// Analyzer name, or `"disabled"`
    pub analyzer: String,
}

/// Report plus the outcome of the analysis attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReportResponse {
    pub report: FleetReport,
    pub analysis: Option<AnalysisResult>,
    /// Why `analysis` is null, when it is.
    pub analysis_error: Option<String>,
}
