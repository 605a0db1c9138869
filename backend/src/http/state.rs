//! Application state for the HTTP server.

use std::sync::Arc;

use crate::analysis::FleetAnalyzer;
use crate::config::AppConfig;

/// Shared, read-only state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when no analysis service is configured.
    pub analyzer: Option<Arc<dyn FleetAnalyzer>>,
}

impl AppState {
    pub fn new(config: AppConfig, analyzer: Option<Arc<dyn FleetAnalyzer>>) -> Self {
        Self {
            config: Arc::new(config),
            analyzer,
        }
    }

    /// Name reported by `/health`.
    pub fn analyzer_name(&self) -> String {
        self.analyzer
            .as_ref()
            .map_or_else(|| "disabled".to_string(), |a| a.name().to_string())
    }
}
