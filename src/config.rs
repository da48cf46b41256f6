use crate::constants::DEFAULT_PAGE_SIZE;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the brokerage API
pub struct Credentials {
    /// Username or email for the brokerage account
    pub username: String,
    /// Password for the brokerage account
    pub password: String,
    /// Multi-factor authentication code, if the account requires one
    pub mfa_code: Option<String>,
    /// Device token paired with MFA approvals; generated when not provided
    pub device_token: Option<String>,
}

impl Credentials {
    /// Creates credentials for a single login attempt
    pub fn new(username: String, password: String, mfa_code: Option<String>) -> Self {
        Self {
            username,
            password,
            mfa_code,
            device_token: None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the portfolio analyzer
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Upstream REST API configuration
    pub rest_api: RestApiConfig,
    /// Dashboard API server configuration
    pub server: ServerConfig,
    /// Rate limiter configuration for upstream requests
    pub rate_limiter: RateLimiterConfig,
    /// Number of items to request per page from paginated endpoints
    pub page_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the upstream brokerage REST API
pub struct RestApiConfig {
    /// Base URL for the brokerage REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the dashboard REST API server
pub struct ServerConfig {
    /// Address the server binds to
    pub host: String,
    /// Port the server listens on
    pub port: u16,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting upstream API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables and an optional `.env` file
    ///
    /// Credentials default to empty strings; the dashboard login endpoint
    /// replaces them per session, so missing credential variables are only a
    /// problem for headless library use.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                username: get_env_or_default("BROKER_USERNAME", String::new()),
                password: get_env_or_default("BROKER_PASSWORD", String::new()),
                mfa_code: std::env::var("BROKER_MFA_CODE").ok(),
                device_token: std::env::var("BROKER_DEVICE_TOKEN").ok(),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "BROKER_API_BASE_URL",
                    String::from("https://api.robinhood.com"),
                ),
                timeout: get_env_or_default("BROKER_API_TIMEOUT", 30),
            },
            server: ServerConfig {
                host: get_env_or_default("API_HOST", String::from("0.0.0.0")),
                port: get_env_or_default("PORT", 8000),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("BROKER_RATE_LIMIT_MAX_REQUESTS", 60),
                period_seconds: get_env_or_default("BROKER_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("BROKER_RATE_LIMIT_BURST_SIZE", 10),
            },
            page_size: get_env_or_default("BROKER_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Returns a copy of this configuration with fresh per-session credentials
    ///
    /// Used by the dashboard login endpoint so every login gets its own
    /// credentials without mutating shared state.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        let mut config = self.clone();
        config.credentials = credentials;
        config
    }
}
