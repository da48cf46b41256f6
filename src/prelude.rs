//! # Portfolio Analyzer Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use portfolio_analyzer::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the portfolio analyzer
pub use crate::config::{Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Session-scoped authentication handler
pub use crate::session::auth::{Auth, Session};

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Portfolio service trait
pub use crate::application::services::PortfolioService;

/// Default portfolio service implementation
pub use crate::application::services::PortfolioServiceImpl;

/// Aggregated dashboard summary
pub use crate::application::services::PortfolioSummary;

// ============================================================================
// HTTP AND TRANSPORT
// ============================================================================

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Rate limiter for upstream requests
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// DATA MODELS
// ============================================================================

/// Account overview models
pub use crate::presentation::account::{
    AccountOverview, AccountProfile, BasicProfile, PortfolioProfile,
};

/// Dividend models
pub use crate::presentation::dividend::{Dividend, DividendState};

/// Holding model
pub use crate::presentation::holding::Holding;

/// Instrument model
pub use crate::presentation::instrument::Instrument;

/// Order models
pub use crate::presentation::order::{Order, OrderSide, OrderState, OrderType, TimeInForce};

// ============================================================================
// SERVER
// ============================================================================

/// API server entry points
pub use crate::server::{AppState, build_router, start_web_server};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Financial formatting helpers
pub use crate::utils::finance::{format_currency, format_percentage, format_quantity};
