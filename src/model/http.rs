use crate::application::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::Paginated;
use crate::model::retry::RetryConfig;
use crate::session::auth::{Auth, Session};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// Authenticated HTTP client for the brokerage API
///
/// This client handles all authentication complexity internally, including:
/// - Initial login
/// - Token refresh and re-authentication when tokens expire
/// - Rate limiting for all API requests
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl HttpClient {
    /// Creates a new client and performs initial authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Creates a new client without performing initial authentication
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        let auth = Arc::new(Auth::new(config.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a GET request and follows `next` links until the collection is exhausted
    ///
    /// # Arguments
    /// * `path` - Initial endpoint path (subsequent pages use the absolute
    ///   URLs the upstream returns)
    pub async fn get_paginated<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let mut all_results = Vec::new();
        let mut next_url = Some(path.to_string());
        let mut page = 1u32;

        while let Some(url) = next_url {
            debug!("Fetching page {} from {}", page, url);
            let response: Paginated<T> = self.get(&url).await?;
            all_results.extend(response.results);
            next_url = response.next;
            page += 1;
        }

        debug!("Paginated fetch complete: {} records", all_results.len());
        Ok(all_results)
    }

    /// Makes a request, refreshing the access token and retrying once when it expired
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        match self.request_internal(method.clone(), path, &body).await {
            Ok(response) => self.parse_response(response).await,
            Err(AppError::TokenExpired) => {
                warn!("Access token expired, refreshing and retrying");
                self.auth.refresh_token().await?;
                let response = self.request_internal(method, path, &body).await?;
                self.parse_response(response).await
            }
            Err(e) => Err(e),
        }
    }

    /// Internal method to make HTTP requests with the current session's bearer token
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let session = self.auth.get_session().await?;
        let url = self.resolve_url(path);

        let auth_header_value = format!("Bearer {}", session.access_token);
        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            body,
            RetryConfig::default(),
        )
        .await
    }

    /// Resolves a path against the configured base URL
    ///
    /// Absolute URLs (pagination `next` links, instrument URLs) pass through
    /// unchanged.
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Parses a successful response body
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Logs out, revoking the session upstream and clearing local state
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Gets the Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Makes an HTTP request with rate limiting and automatic retry on throttling
///
/// This function provides a centralized way to make HTTP requests to the
/// brokerage API with built-in rate limiting and retry logic. Throttled
/// requests (429) are retried per `retry_config` with a randomized delay;
/// expired-token responses surface as [`AppError::TokenExpired`] so callers
/// can refresh and retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method (GET, POST, PUT, DELETE, etc.)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (will be serialized to JSON)
/// * `retry_config` - Retry configuration (max retries and delay)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Error if the request fails
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
    retry_config: RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();
    let delay_secs = retry_config.delay_secs();

    loop {
        // Wait for rate limiter before making request
        {
            let limiter = rate_limiter.read().await;
            limiter.wait().await;
        }

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url);
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                retry_count += 1;

                // 0 = infinite retries
                if max_retries > 0 && retry_count > max_retries {
                    error!(
                        "Rate limit exceeded after {} attempts. Max retries ({}) reached.",
                        retry_count - 1,
                        max_retries
                    );
                    return Err(AppError::RateLimitExceeded);
                }

                let jitter_ms = rand::random::<u64>() % 1000;
                warn!(
                    "Upstream throttled request (attempt {}). Waiting {}s before retry",
                    retry_count, delay_secs
                );
                tokio::time::sleep(Duration::from_secs(delay_secs) + Duration::from_millis(jitter_ms))
                    .await;
                continue;
            }
            StatusCode::UNAUTHORIZED => {
                let body_text = response.text().await.unwrap_or_default();
                if body_text.contains("invalid_token") || body_text.contains("expired") {
                    return Err(AppError::TokenExpired);
                }
                error!("Unauthorized: {}", body_text);
                return Err(AppError::Unauthorized);
            }
            StatusCode::NOT_FOUND => {
                return Err(AppError::NotFound);
            }
            _ => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body_text);
                return Err(AppError::Unexpected(status));
            }
        }
    }
}
