//! HTTP handlers for the REST API.
//!
//! Report endpoints take the raw export text as the request body.

use axum::{body::Bytes, extract::State, Json};
use tracing::debug;

use super::dto::{AnalysisReportResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::analysis::run_analysis;
use crate::services::FleetReport;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        analyzer: state.analyzer_name(),
    }))
}

// =============================================================================
// Reports
// =============================================================================

/// POST /v1/reports
///
/// Parse the export in the body and return the full report.
pub async fn create_report(body: Bytes) -> HandlerResult<FleetReport> {
    let raw = body_text(body)?;
    Ok(Json(FleetReport::from_csv(&raw)))
}

/// POST /v1/reports/analysis
///
/// Same as `/v1/reports`, then asks the analyzer about the drivers. Analyzer
/// failures are reported in `analysis_error`; the response is still 200.
pub async fn create_report_with_analysis(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<AnalysisReportResponse> {
    let raw = body_text(body)?;
    let report = FleetReport::from_csv(&raw);
    let outcome = run_analysis(state.analyzer.as_deref(), &report.digests()).await;

    Ok(Json(AnalysisReportResponse {
        report,
        analysis: outcome.analysis,
        analysis_error: outcome.error,
    }))
}

/// Unmatched routes.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn body_text(body: Bytes) -> Result<String, AppError> {
    debug!(bytes = body.len(), "received export body");
    Ok(String::from_utf8(body.to_vec())?)
}
