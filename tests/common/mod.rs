use portfolio_analyzer::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, ServerConfig,
};

/// Builds a configuration pointed at a mock server
pub fn test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            username: "test_user".to_string(),
            password: "test_password".to_string(),
            mfa_code: None,
            device_token: Some("test-device-token".to_string()),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 10,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 1000,
            period_seconds: 1,
            burst_size: 100,
        },
        page_size: 25,
    }
}

/// A token response body accepted by the login and refresh endpoints
pub fn token_body(access_token: &str) -> String {
    format!(
        r#"{{"access_token":"{}","refresh_token":"refresh-1","expires_in":86400,"token_type":"Bearer","scope":"internal"}}"#,
        access_token
    )
}
