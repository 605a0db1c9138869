//! HTTP server for fleet reports.
//!
//! Thin axum layer over the report pipeline and the optional analyzer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Raw export body in, JSON report out                    │
//! │  - CORS, compression, tracing, error envelope             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Report pipeline (parsing/, services/)                    │
//! │  - parse → aggregate → summarize                          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ driver digests
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  FleetAnalyzer (analysis/)                                │
//! │  - optional, best effort                                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
