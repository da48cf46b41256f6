use crate::config::Config;
use crate::error::AppError;
use crate::server::handlers;
use crate::server::types::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Builds the API router over the given state
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/portfolio/summary", get(handlers::get_summary))
        .route("/api/portfolio/holdings", get(handlers::get_holdings))
        .route("/api/portfolio/dividends", get(handlers::get_dividends))
        .route("/api/portfolio/orders", get(handlers::get_orders))
        .route("/api/portfolio/refresh", post(handlers::refresh))
        .route("/api/account", get(handlers::get_account))
        .layer(cors)
        .with_state(state)
}

/// Starts the API server and serves until the process exits
pub async fn start_web_server(config: Config) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(Arc::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Portfolio API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, stopping server");
}
