#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use fleet_insights::analysis::{AnalysisError, AnalysisResult, DriverDigest, FleetAnalyzer};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of `tests/fixtures/<name>`.
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("missing fixture {name}: {e}"))
}

pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        efficiency_score: 78.0,
        bottlenecks: vec!["Long idle gap for Ann Lee".to_string()],
        recommendations: vec!["Move R12 earlier".to_string()],
        summary: "Fleet performs well overall.".to_string(),
    }
}

/// Always returns the same analysis.
pub struct StaticAnalyzer(pub AnalysisResult);

#[async_trait::async_trait]
impl FleetAnalyzer for StaticAnalyzer {
    fn name(&self) -> &str {
        "static"
    }

    async fn analyze(&self, _drivers: &[DriverDigest]) -> Result<AnalysisResult, AnalysisError> {
        Ok(self.0.clone())
    }
}

/// Always fails with an upstream status error.
pub struct FailingAnalyzer;

#[async_trait::async_trait]
impl FleetAnalyzer for FailingAnalyzer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn analyze(&self, _drivers: &[DriverDigest]) -> Result<AnalysisResult, AnalysisError> {
        Err(AnalysisError::Status {
            status: 502,
            body: "upstream unavailable".to_string(),
        })
    }
}
