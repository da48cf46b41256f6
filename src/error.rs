use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The upstream API rejected the supplied credentials
    #[error("bad credentials")]
    BadCredentials,

    /// The upstream API requires a multi-factor authentication code
    #[error("mfa code required")]
    MfaRequired,

    /// No session is available and the request requires one
    #[error("not logged in")]
    NotLoggedIn,

    /// The request was rejected as unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// The access token has expired and must be refreshed
    #[error("access token expired")]
    TokenExpired,

    /// The upstream rate limit has been exceeded and retries ran out
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// The requested resource does not exist
    #[error("not found")]
    NotFound,

    /// The caller supplied invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The upstream API returned an unexpected status code
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),

    /// Network level error from the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization or deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error, from binding or serving the API listener
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
