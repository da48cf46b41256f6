mod common;

use common::{test_config, token_body};
use mockito::{Matcher, Server};
use portfolio_analyzer::application::rate_limiter::RateLimiter;
use portfolio_analyzer::config::RateLimiterConfig;
use portfolio_analyzer::error::AppError;
use portfolio_analyzer::model::http::{make_http_request, HttpClient};
use portfolio_analyzer::model::retry::RetryConfig;
use reqwest::Method;
use std::sync::Arc;
use tokio::sync::RwLock;

fn test_rate_limiter() -> Arc<RwLock<RateLimiter>> {
    Arc::new(RwLock::new(RateLimiter::new(&RateLimiterConfig {
        max_requests: 1000,
        period_seconds: 1,
        burst_size: 100,
    })))
}

#[tokio::test]
async fn test_expired_token_refreshes_and_retries() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/oauth2/token/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "grant_type": "password",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(token_body("access-1"))
        .create_async()
        .await;
    let refresh_mock = server
        .mock("POST", "/oauth2/token/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "grant_type": "refresh_token",
            "refresh_token": "refresh-1",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(token_body("access-2"))
        .expect(1)
        .create_async()
        .await;

    // The first bearer token is rejected as expired, the refreshed one works
    let expired_mock = server
        .mock("GET", "/portfolio/holdings/?page_size=25")
        .match_header("authorization", "Bearer access-1")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error":"invalid_token"}"#)
        .expect(1)
        .create_async()
        .await;
    let ok_mock = server
        .mock("GET", "/portfolio/holdings/?page_size=25")
        .match_header("authorization", "Bearer access-2")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"next": null, "results": []}"#)
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server.url()))
        .await
        .expect("login should succeed");

    let response: serde_json::Value = client
        .get("portfolio/holdings/?page_size=25")
        .await
        .expect("request should succeed after refresh");

    assert!(response["results"].as_array().unwrap().is_empty());
    expired_mock.assert_async().await;
    refresh_mock.assert_async().await;
    ok_mock.assert_async().await;
}

#[tokio::test]
async fn test_throttled_request_retries_until_limit() {
    let mut server = Server::new_async().await;
    let throttled_mock = server
        .mock("GET", "/throttled/")
        .with_status(429)
        .with_body("slow down")
        .expect(3)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/throttled/", server.url());

    let result = make_http_request::<()>(
        &client,
        test_rate_limiter(),
        Method::GET,
        &url,
        vec![("Accept", "application/json")],
        &None,
        RetryConfig::with_max_retries_and_delay(2, 0),
    )
    .await;

    assert!(matches!(result, Err(AppError::RateLimitExceeded)));
    // Initial attempt plus two retries
    throttled_mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_without_expiry_marker() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/denied/")
        .with_status(401)
        .with_body(r#"{"error":"forbidden"}"#)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/denied/", server.url());

    let result = make_http_request::<()>(
        &client,
        test_rate_limiter(),
        Method::GET,
        &url,
        vec![],
        &None,
        RetryConfig::with_max_retries(1),
    )
    .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
}
