//! Errors raised while calling the analysis service.

/// Why an analysis attempt produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// No analyzer is configured for this process.
    #[error("analysis service not configured")]
    NotConfigured,

    /// There was nothing to analyze.
    #[error("no driver data to analyze")]
    NoData,

    /// The configured endpoint is not a valid URL.
    #[error("invalid analyzer endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    /// Transport failure (connect, timeout, TLS, body read).
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("analysis service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response did not match the expected analysis shape.
    #[error("could not decode analysis: {0}")]
    Decode(String),
}

impl AnalysisError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
