//! Payload and result shapes at the analysis-service boundary.

use serde::{Deserialize, Serialize};

use crate::services::DriverStats;

/// Narrative analysis returned by the external service.
///
/// Treated as opaque: nothing here checks that the score is within 0-100 or
/// that the lists are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub efficiency_score: f64,
    #[serde(default)]
    pub bottlenecks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub summary: String,
}

/// What the analyzer is told about one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDigest {
    pub name: String,
    pub load_count: usize,
    pub total_distance_km: f64,
    pub avg_gap_minutes: i64,
    /// Route numbers in despatch order.
    pub routes: Vec<String>,
}

impl From<&DriverStats> for DriverDigest {
    fn from(stats: &DriverStats) -> Self {
        Self {
            name: stats.driver_name.clone(),
            load_count: stats.load_count(),
            total_distance_km: stats.total_kms,
            avg_gap_minutes: stats.avg_time_between_loads_minutes,
            routes: stats.route_numbers(),
        }
    }
}

/// Result of a best-effort analysis attempt.
///
/// Exactly one of `analysis` and `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub analysis: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl AnalysisOutcome {
    pub fn success(analysis: AnalysisResult) -> Self {
        Self {
            analysis: Some(analysis),
            error: None,
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            analysis: None,
            error: Some(error.to_string()),
        }
    }
}
