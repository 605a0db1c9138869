//! Fleet analyzer capability.
//!
//! The analysis service is reached only through [`FleetAnalyzer`], so the
//! report pipeline stays independent of any particular provider. Failures are
//! never fatal: callers get the report regardless and the analysis is simply
//! absent.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::AnalysisError;
use super::types::{AnalysisOutcome, AnalysisResult, DriverDigest};

/// Something that can turn driver digests into a narrative analysis.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so they can be shared through
/// server state.
#[async_trait]
pub trait FleetAnalyzer: Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &str;

    /// Ask for an analysis of the given drivers.
    ///
    /// One request, one response. Implementations must not retry.
    async fn analyze(&self, drivers: &[DriverDigest]) -> Result<AnalysisResult, AnalysisError>;
}

/// Run an analysis, folding every failure into [`AnalysisOutcome::error`].
///
/// An absent analyzer and an empty driver list both short-circuit without a
/// call.
pub async fn run_analysis(
    analyzer: Option<&dyn FleetAnalyzer>,
    drivers: &[DriverDigest],
) -> AnalysisOutcome {
    let Some(analyzer) = analyzer else {
        return AnalysisOutcome::failure(AnalysisError::NotConfigured);
    };
    if drivers.is_empty() {
        return AnalysisOutcome::failure(AnalysisError::NoData);
    }

    debug!(analyzer = analyzer.name(), drivers = drivers.len(), "requesting fleet analysis");
    match analyzer.analyze(drivers).await {
        Ok(result) => AnalysisOutcome::success(result),
        Err(e) => {
            warn!(analyzer = analyzer.name(), error = %e, "fleet analysis failed");
            AnalysisOutcome::failure(e)
        }
    }
}

/// Analysis or nothing.
pub async fn analyze_best_effort(
    analyzer: &dyn FleetAnalyzer,
    drivers: &[DriverDigest],
) -> Option<AnalysisResult> {
    run_analysis(Some(analyzer), drivers).await.analysis
}
