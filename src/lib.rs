//! # Portfolio Analyzer
//!
//! A client and REST API for a brokerage portfolio dashboard. It manages a
//! session-scoped OAuth login, caches upstream results per operation and
//! serves aggregated holdings, dividend, order and account data over HTTP.
//!
//! ## Architecture
//!
//! - [`session`]: OAuth password-grant login, token refresh and revocation
//! - [`model`]: HTTP transport, retry policy and wire-level response types
//! - [`presentation`]: typed models for holdings, dividends, orders and accounts
//! - [`application`]: rate limiting, result caching and the portfolio service
//! - [`server`]: the axum REST API the dashboard talks to
//! - [`utils`]: configuration, logging and financial formatting helpers
//!
//! ## Example
//!
//! ```rust,no_run
//! use portfolio_analyzer::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let config = Config::new();
//!     let client = HttpClient::new(config).await?;
//!     let service = PortfolioServiceImpl::new(Arc::new(client));
//!     let summary = service.get_summary().await?;
//!     println!("Total equity: {}", format_currency(summary.total_equity));
//!     Ok(())
//! }
//! ```

/// Application layer: caching, rate limiting and the portfolio service
pub mod application;
/// Configuration loaded from the environment
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport and wire-level types
pub mod model;
/// Convenient re-exports of the most used types
pub mod prelude;
/// Typed data models for the dashboard
pub mod presentation;
/// The REST API server
pub mod server;
/// Session management and authentication
pub mod session;
/// Shared utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
