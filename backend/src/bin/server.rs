//! Fleet Insights HTTP Server
//!
//! Serves fleet reports over HTTP. The analysis endpoint is backed by an
//! external service when one is configured.
//!
//! # Usage
//!
//! ```bash
//! # Reports only
//! cargo run --bin fleet-server
//!
//! # With the analysis service
//! ANALYZER_ENABLED=true ANALYZER_ENDPOINT=https://analysis.example.com/v1/fleet \
//!   ANALYZER_API_KEY=... cargo run --bin fleet-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ANALYZER_*`: see [`fleet_insights::config`]
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use fleet_insights::analysis::{FleetAnalyzer, HttpFleetAnalyzer};
use fleet_insights::config::AppConfig;
use fleet_insights::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Fleet Insights HTTP Server");

    let config = AppConfig::load()?;

    let analyzer: Option<Arc<dyn FleetAnalyzer>> = if config.analyzer.is_active() {
        let analyzer = HttpFleetAnalyzer::new(&config.analyzer)?;
        info!("Analysis service at {}", analyzer.endpoint());
        Some(Arc::new(analyzer))
    } else {
        if config.analyzer.enabled {
            warn!("Analyzer enabled but no endpoint configured; analysis disabled");
        }
        None
    };

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_router(AppState::new(config, analyzer));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
