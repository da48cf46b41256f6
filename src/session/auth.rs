//! Authentication and session management for the brokerage API
//!
//! This module provides a session-scoped authentication layer:
//! - password-grant login (with optional MFA code)
//! - automatic token refresh when the access token expires
//! - best-effort upstream revocation on logout
//!
//! Every [`Auth`] instance owns exactly one session. There is no
//! process-global session state: dropping the `Auth` drops the session, and
//! two `Auth` instances can never observe each other's tokens.

use crate::application::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::constants::{
    DEFAULT_TOKEN_LIFETIME_SECS, OAUTH_CLIENT_ID, OAUTH_SCOPE, TOKEN_REFRESH_MARGIN_SECS,
    USER_AGENT,
};
use crate::error::AppError;
use crate::model::auth::{LoginResponse, RevokeTokenRequest, TokenResponse};
use crate::model::http::make_http_request;
use crate::model::retry::RetryConfig;
use crate::utils::id::generate_device_token;
use chrono::Utc;
use reqwest::{Client, Method};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session information for authenticated requests
///
/// An authenticated handle to the brokerage account, valid until logout or
/// expiry. Owned by the `Auth` that created it; callers get clones.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer access token
    pub access_token: String,
    /// Refresh token for obtaining a new access token
    pub refresh_token: String,
    /// Token type (typically "Bearer")
    pub token_type: String,
    /// Granted scope
    pub scope: String,
    /// Unix timestamp when the access token expires (seconds since epoch)
    pub expires_at: u64,
}

impl Session {
    /// Checks if the session is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60)
    ///
    /// # Returns
    /// * `true` if the session is expired or will expire within the margin
    /// * `false` if the session is still valid
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<u64>) -> bool {
        let margin = margin_seconds.unwrap_or(60);
        let now = Utc::now().timestamp() as u64;
        now + margin >= self.expires_at
    }

    /// Gets the number of seconds until the session expires (0 when already expired)
    #[must_use]
    pub fn seconds_until_expiry(&self) -> u64 {
        let now = Utc::now().timestamp() as u64;
        self.expires_at.saturating_sub(now)
    }
}

impl From<TokenResponse> for Session {
    fn from(tokens: TokenResponse) -> Self {
        let expires_at = tokens.expires_at();
        Session {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            scope: tokens.scope,
            expires_at,
        }
    }
}

/// Authentication manager for the brokerage API
///
/// Handles login, token refresh and logout for a single logical user
/// session. The session lives behind an `RwLock` so concurrent requests can
/// share it, but it is never exposed outside this instance.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    device_token: String,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// A device token is generated per instance unless the configuration
    /// provides one, so separate sessions never share device identity.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));
        let device_token = config
            .credentials
            .device_token
            .clone()
            .unwrap_or_else(generate_device_token);

        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
            rate_limiter,
            device_token,
        }
    }

    /// Gets the current session, ensuring tokens are valid
    ///
    /// Refreshes the access token when it is close to expiry and performs a
    /// full login when no session exists yet.
    ///
    /// # Returns
    /// * `Ok(Session)` - Valid session with fresh tokens
    /// * `Err(AppError)` - If authentication fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let session = self.session.read().await;

        if let Some(sess) = session.as_ref() {
            if sess.is_expired(Some(TOKEN_REFRESH_MARGIN_SECS)) {
                drop(session);
                debug!("Access token needs refresh");
                return self.refresh_token().await;
            }
            return Ok(sess.clone());
        }

        drop(session);

        info!("No active session, logging in");
        self.login().await
    }

    /// Performs login with the configured credentials
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError)` - `BadCredentials` when the upstream rejects the
    ///   credentials, `MfaRequired` when a multi-factor code is needed
    pub async fn login(&self) -> Result<Session, AppError> {
        let url = self.token_url();

        let mut body = serde_json::json!({
            "grant_type": "password",
            "client_id": OAUTH_CLIENT_ID,
            "scope": OAUTH_SCOPE,
            "expires_in": DEFAULT_TOKEN_LIFETIME_SECS,
            "device_token": self.device_token,
            "username": self.config.credentials.username.trim(),
            "password": self.config.credentials.password,
        });
        if let Some(mfa_code) = &self.config.credentials.mfa_code {
            body["mfa_code"] = serde_json::json!(mfa_code.trim());
        }

        debug!("Sending login request to: {}", url);

        let response = match self.token_request(&url, body).await {
            Ok(response) => response,
            Err(AppError::Unauthorized) | Err(AppError::Unexpected(reqwest::StatusCode::BAD_REQUEST)) => {
                return Err(AppError::BadCredentials);
            }
            Err(e) => return Err(e),
        };

        let login: LoginResponse = response.json().await?;
        let session = match login {
            LoginResponse::Tokens(tokens) => Session::from(tokens),
            LoginResponse::Challenge(challenge) => {
                info!("Login challenged, mfa type: {}", challenge.mfa_type);
                return Err(AppError::MfaRequired);
            }
        };

        let mut stored = self.session.write().await;
        *stored = Some(session.clone());

        info!(
            "Login successful, token valid for {}s",
            session.seconds_until_expiry()
        );
        Ok(session)
    }

    /// Refreshes the access token using the refresh grant
    ///
    /// Falls back to a full login when there is no session or the upstream
    /// rejects the refresh token.
    ///
    /// # Returns
    /// * `Ok(Session)` - New session with refreshed tokens
    /// * `Err(AppError)` - If both refresh and re-login fail
    pub async fn refresh_token(&self) -> Result<Session, AppError> {
        let current = {
            let session = self.session.read().await;
            session.clone()
        };

        let Some(current) = current else {
            warn!("No session to refresh, performing login");
            return self.login().await;
        };

        let url = self.token_url();
        let body = serde_json::json!({
            "grant_type": "refresh_token",
            "client_id": OAUTH_CLIENT_ID,
            "scope": OAUTH_SCOPE,
            "device_token": self.device_token,
            "refresh_token": current.refresh_token,
        });

        debug!("Sending token refresh request to: {}", url);

        let tokens: Result<TokenResponse, AppError> = match self.token_request(&url, body).await {
            Ok(response) => response.json().await.map_err(AppError::from),
            Err(e) => Err(e),
        };

        match tokens {
            Ok(tokens) => {
                let session = Session::from(tokens);
                let mut stored = self.session.write().await;
                *stored = Some(session.clone());
                debug!("Token refreshed successfully");
                Ok(session)
            }
            Err(e) => {
                warn!("Token refresh failed ({e}), performing full login");
                self.login().await
            }
        }
    }

    /// Logs out, revoking the refresh token upstream and clearing the session
    ///
    /// Revocation is best-effort: a failed revoke call is logged and the
    /// local session is cleared regardless, so local state never outlives a
    /// logout.
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");

        let current = {
            let mut session = self.session.write().await;
            session.take()
        };

        if let Some(session) = current {
            let url = format!(
                "{}/oauth2/revoke_token/",
                self.config.rest_api.base_url.trim_end_matches('/')
            );
            let body = RevokeTokenRequest {
                client_id: OAUTH_CLIENT_ID.to_string(),
                token: session.refresh_token,
            };

            match self.token_request(&url, serde_json::to_value(&body)?).await {
                Ok(_) => info!("Session revoked upstream"),
                Err(e) => warn!("Could not revoke session upstream: {e}"),
            }
        }

        info!("Logged out, local session cleared");
        Ok(())
    }

    /// True when this instance currently holds a session
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    fn token_url(&self) -> String {
        format!(
            "{}/oauth2/token/",
            self.config.rest_api.base_url.trim_end_matches('/')
        )
    }

    /// Sends an unauthenticated POST to a token endpoint
    async fn token_request(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, AppError> {
        make_http_request(
            &self.client,
            self.rate_limiter.clone(),
            Method::POST,
            url,
            vec![
                ("Content-Type", "application/json"),
                ("Accept", "application/json"),
            ],
            &Some(body),
            RetryConfig::with_max_retries(3),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_expiring_in(secs: i64) -> Session {
        Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            token_type: "Bearer".to_string(),
            scope: "internal".to_string(),
            expires_at: (Utc::now().timestamp() + secs) as u64,
        }
    }

    #[test]
    fn test_session_expiry_margin() {
        let session = session_expiring_in(120);
        assert!(!session.is_expired(Some(60)));
        assert!(session.is_expired(Some(180)));
    }

    #[test]
    fn test_expired_session_reports_zero_remaining() {
        let session = Session {
            expires_at: 0,
            ..session_expiring_in(0)
        };
        assert_eq!(session.seconds_until_expiry(), 0);
        assert!(session.is_expired(None));
    }

    #[test]
    fn test_session_from_token_response() {
        let tokens = TokenResponse {
            access_token: "at-1".to_string(),
            refresh_token: "rt-1".to_string(),
            expires_in: 3600,
            token_type: "Bearer".to_string(),
            scope: "internal".to_string(),
        };
        let session = Session::from(tokens);
        assert_eq!(session.access_token, "at-1");
        assert!(session.seconds_until_expiry() > 3500);
    }
}
