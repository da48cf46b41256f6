/// Token response models for the OAuth endpoints
pub mod auth;
/// HTTP request utilities with rate limiting and retry
pub mod http;
/// Pagination envelope for upstream responses
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
