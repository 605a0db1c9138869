//! HTTP-backed [`FleetAnalyzer`].
//!
//! Sends one JSON request per analysis:
//!
//! ```text
//! POST <endpoint>
//! Authorization: Bearer <api_key>      (when configured)
//! { "model": "...", "prompt": "...", "drivers": [DriverDigest, ...] }
//! ```
//!
//! The response body is untrusted. It is accepted as an analysis when it is
//! the analysis object itself, a `{ "data": ... }` envelope, or an object
//! whose `text`, `output` or `content` string carries the analysis JSON
//! (fenced code blocks allowed).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::analyzer::FleetAnalyzer;
use super::error::AnalysisError;
use super::prompt::build_prompt;
use super::types::{AnalysisResult, DriverDigest};
use crate::config::AnalyzerSettings;

/// Longest error body kept in [`AnalysisError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Keys that may hold the analysis as a string.
const TEXT_KEYS: [&str; 3] = ["text", "output", "content"];

#[derive(Serialize)]
struct AnalysisRequest<'a> {
    model: &'a str,
    prompt: String,
    drivers: &'a [DriverDigest],
}

/// Analyzer that calls a remote service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFleetAnalyzer {
    client: Client,
    endpoint: Url,
    model: String,
    api_key: Option<String>,
}

impl HttpFleetAnalyzer {
    /// Build an analyzer from settings.
    ///
    /// Fails when the endpoint is missing or not a URL, or when the HTTP
    /// client cannot be constructed.
    pub fn new(settings: &AnalyzerSettings) -> Result<Self, AnalysisError> {
        let raw = settings
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or(AnalysisError::NotConfigured)?;

        let endpoint = Url::parse(raw.trim()).map_err(|e| AnalysisError::InvalidEndpoint {
            endpoint: raw.to_string(),
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("fleet-insights/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            model: settings.model.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FleetAnalyzer for HttpFleetAnalyzer {
    fn name(&self) -> &str {
        "http"
    }

    async fn analyze(&self, drivers: &[DriverDigest]) -> Result<AnalysisResult, AnalysisError> {
        let payload = AnalysisRequest {
            model: &self.model,
            prompt: build_prompt(drivers),
            drivers,
        };

        let mut request = self.client.post(self.endpoint.clone()).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "analysis service responded");

        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        decode_analysis(&body)
    }
}

/// Decode an analysis from a raw response body.
pub fn decode_analysis(body: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AnalysisError::decode(format!("response is not JSON: {e}")))?;

    if let Ok(result) = serde_json::from_value::<AnalysisResult>(value.clone()) {
        return Ok(result);
    }

    if let Some(data) = value.get("data") {
        if let Ok(result) = serde_json::from_value::<AnalysisResult>(data.clone()) {
            return Ok(result);
        }
    }

    for key in TEXT_KEYS {
        let Some(text) = value.get(key).and_then(Value::as_str) else {
            continue;
        };
        let json = extract_json(text)
            .ok_or_else(|| AnalysisError::decode(format!("no JSON object in '{key}'")))?;
        return serde_json::from_str(json)
            .map_err(|e| AnalysisError::decode(format!("invalid analysis in '{key}': {e}")));
    }

    Err(AnalysisError::decode(
        "response does not contain an analysis object",
    ))
}

/// Pull a JSON object out of free text.
///
/// Prefers the first fenced code block; otherwise takes everything between
/// the first `{` and the last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```") {
        let rest = &text[start + 3..];
        let body_start = rest.find('\n').map_or(0, |i| i + 1);
        let rest = &rest[body_start..];
        if let Some(end) = rest.find("```") {
            let inner = rest[..end].trim();
            if inner.starts_with('{') {
                return Some(inner);
            }
        }
    }

    let open = text.find('{')?;
    let close = text.rfind('}')?;
    (close > open).then(|| &text[open..=close])
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANALYSIS: &str = r#"{"efficiencyScore":64,"bottlenecks":["Idle gaps"],"recommendations":["Merge R2 and R3"],"summary":"Moderate"}"#;

    fn settings(endpoint: Option<&str>) -> AnalyzerSettings {
        AnalyzerSettings {
            enabled: true,
            endpoint: endpoint.map(str::to_string),
            ..AnalyzerSettings::default()
        }
    }

    #[test]
    fn test_decode_direct_object() {
        let result = decode_analysis(ANALYSIS).unwrap();
        assert_eq!(result.efficiency_score, 64.0);
        assert_eq!(result.recommendations, vec!["Merge R2 and R3"]);
    }

    #[test]
    fn test_decode_data_envelope() {
        let body = format!(r#"{{"data":{ANALYSIS}}}"#);
        assert_eq!(decode_analysis(&body).unwrap().summary, "Moderate");
    }

    #[test]
    fn test_decode_fenced_text() {
        let text = format!("Here you go:\n```json\n{ANALYSIS}\n```\nThanks");
        let body = serde_json::json!({ "text": text }).to_string();
        assert_eq!(decode_analysis(&body).unwrap().bottlenecks, vec!["Idle gaps"]);
    }

    #[test]
    fn test_decode_content_without_fence() {
        let body = serde_json::json!({ "content": format!("Result: {ANALYSIS}") }).to_string();
        assert_eq!(decode_analysis(&body).unwrap().efficiency_score, 64.0);
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(matches!(
            decode_analysis(r#"{"score": 1}"#),
            Err(AnalysisError::Decode(_))
        ));
        assert!(matches!(
            decode_analysis("not json"),
            Err(AnalysisError::Decode(_))
        ));
        let body = serde_json::json!({ "output": "no object here" }).to_string();
        assert!(matches!(decode_analysis(&body), Err(AnalysisError::Decode(_))));
    }

    #[test]
    fn test_extract_json_variants() {
        assert_eq!(extract_json("```\n{\"a\":1}\n```"), Some("{\"a\":1}"));
        assert_eq!(extract_json("```json {\"a\":1}```"), Some("{\"a\":1}"));
        assert_eq!(extract_json("x {\"a\":{\"b\":2}} y"), Some("{\"a\":{\"b\":2}}"));
        assert_eq!(extract_json("} backwards {"), None);
        assert_eq!(extract_json("plain"), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_new_requires_endpoint() {
        assert!(matches!(
            HttpFleetAnalyzer::new(&settings(None)),
            Err(AnalysisError::NotConfigured)
        ));
        assert!(matches!(
            HttpFleetAnalyzer::new(&settings(Some("  "))),
            Err(AnalysisError::NotConfigured)
        ));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(matches!(
            HttpFleetAnalyzer::new(&settings(Some("not a url"))),
            Err(AnalysisError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_new_accepts_valid_url() {
        let analyzer = HttpFleetAnalyzer::new(&settings(Some("http://localhost:9000/analyze"))).unwrap();
        assert_eq!(analyzer.endpoint().path(), "/analyze");
        assert_eq!(analyzer.name(), "http");
    }
}
