use crate::application::services::PortfolioService;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the API server
///
/// The service slot is empty until a login succeeds; every portfolio route
/// requires it to be populated. A second login replaces the slot with a fresh
/// session-scoped service.
#[derive(Clone)]
pub struct AppState {
    /// Base configuration the server was started with
    pub base_config: Arc<Config>,
    /// The active portfolio service, if logged in
    pub service: Arc<RwLock<Option<Arc<dyn PortfolioService>>>>,
}

impl AppState {
    /// Creates a logged-out state
    pub fn new(base_config: Arc<Config>) -> Self {
        Self {
            base_config,
            service: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the active service, if any
    pub async fn active_service(&self) -> Option<Arc<dyn PortfolioService>> {
        self.service.read().await.clone()
    }
}

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub mfa_code: Option<String>,
}

/// Standard response envelope for all API routes
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the operation succeeded
    pub success: bool,
    /// The payload when `success` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// A human-readable message, set on errors and some confirmations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Builds a success response with a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Builds a success response with only a message
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Builds a failure response with a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Query parameters for the orders route
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersQuery {
    /// `open` (default) or `all`
    #[serde(default)]
    pub scope: Option<String>,
    /// Maximum number of orders to return when `scope=all`
    #[serde(default)]
    pub limit: Option<usize>,
    /// Bypass the cache for this request
    #[serde(default)]
    pub force_refresh: Option<bool>,
}

/// Query parameters shared by the simple portfolio routes
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshQuery {
    /// Bypass the cache for this request
    #[serde(default)]
    pub force_refresh: Option<bool>,
}

/// Payload for the dividends route: history plus the running total
#[derive(Debug, Clone, Serialize)]
pub struct DividendsPayload {
    pub total: f64,
    pub dividends: Vec<crate::presentation::dividend::Dividend>,
}
