use crate::application::services::{PortfolioService, PortfolioServiceImpl};
use crate::config::Credentials;
use crate::constants::RECENT_ORDERS_LIMIT;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::server::types::{
    ApiResponse, AppState, DividendsPayload, LoginRequest, OrdersQuery, RefreshQuery,
};
use crate::utils::finance::validate_credentials;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let logged_in = state.active_service().await.is_some();
    Json(serde_json::json!({
        "status": "ok",
        "logged_in": logged_in,
    }))
}

/// Logs in with the supplied credentials and installs a fresh service
///
/// A previous session, if any, is replaced; its upstream logout is
/// best-effort.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(message) = validate_credentials(&request.username, &request.password) {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, message);
    }

    let credentials = Credentials::new(request.username, request.password, request.mfa_code);
    let config = state.base_config.with_credentials(credentials);

    match HttpClient::new(config).await {
        Ok(client) => {
            let service: Arc<dyn PortfolioService> =
                Arc::new(PortfolioServiceImpl::new(Arc::new(client)));

            let previous = {
                let mut slot = state.service.write().await;
                slot.replace(service)
            };
            if let Some(old) = previous {
                if let Err(e) = old.logout().await {
                    warn!("Failed to revoke previous session: {}", e);
                }
            }

            info!("Login successful");
            (
                StatusCode::OK,
                Json(ApiResponse::<()>::ok_message("logged in")),
            )
        }
        Err(AppError::BadCredentials) => {
            error_response(StatusCode::UNAUTHORIZED, "invalid username or password")
        }
        Err(AppError::MfaRequired) => error_response(
            StatusCode::UNAUTHORIZED,
            "multi-factor code required, resubmit with mfa_code",
        ),
        Err(e) => {
            error!("Login failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, format!("login failed: {}", e))
        }
    }
}

/// Revokes the active session and clears the service slot
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let service = { state.service.write().await.take() };

    match service {
        Some(service) => {
            if let Err(e) = service.logout().await {
                warn!("Upstream logout failed: {}", e);
            }
            info!("Logged out");
            (
                StatusCode::OK,
                Json(ApiResponse::<()>::ok_message("logged out")),
            )
        }
        None => error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string()),
    }
}

/// Returns the aggregated portfolio summary
pub async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    let Some(service) = state.active_service().await else {
        return error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string());
    };

    data_response(service.get_summary().await)
}

/// Returns current holdings
pub async fn get_holdings(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> impl IntoResponse {
    let Some(service) = state.active_service().await else {
        return error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string());
    };

    let force_refresh = query.force_refresh.unwrap_or(false);
    data_response(service.get_holdings(force_refresh).await)
}

/// Returns dividend history together with the paid-out total
pub async fn get_dividends(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> impl IntoResponse {
    let Some(service) = state.active_service().await else {
        return error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string());
    };

    let force_refresh = query.force_refresh.unwrap_or(false);
    let result: Result<DividendsPayload, AppError> = async {
        let dividends = service.get_dividends(force_refresh).await?;
        let total = service.get_total_dividends(false).await?;
        Ok(DividendsPayload { total, dividends })
    }
    .await;

    data_response(result)
}

/// Returns orders, either open ones (default) or the recent history
pub async fn get_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> impl IntoResponse {
    let Some(service) = state.active_service().await else {
        return error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string());
    };

    let force_refresh = query.force_refresh.unwrap_or(false);
    let scope = query.scope.as_deref().unwrap_or("open");

    let result = match scope {
        "open" => service.get_open_orders(force_refresh).await,
        "all" => {
            let limit = query.limit.unwrap_or(RECENT_ORDERS_LIMIT);
            service.get_all_orders(force_refresh).await.map(|mut orders| {
                orders.truncate(limit);
                orders
            })
        }
        other => {
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("unknown order scope '{}', expected 'open' or 'all'", other),
            );
        }
    };

    data_response(result)
}

/// Returns the combined account overview
pub async fn get_account(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> impl IntoResponse {
    let Some(service) = state.active_service().await else {
        return error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string());
    };

    let force_refresh = query.force_refresh.unwrap_or(false);
    data_response(service.get_account_overview(force_refresh).await)
}

/// Clears the result cache so subsequent reads fetch fresh data
pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    let Some(service) = state.active_service().await else {
        return error_response(StatusCode::UNAUTHORIZED, AppError::NotLoggedIn.to_string());
    };

    service.clear_cache().await;
    (
        StatusCode::OK,
        Json(ApiResponse::<()>::ok_message("cache cleared")),
    )
}

/// Wraps a service result in the standard envelope
///
/// Auth failures map to 401 so the dashboard can prompt for a new login;
/// other upstream errors are reported in the envelope with a 200 status.
fn data_response<T: Serialize>(result: Result<T, AppError>) -> (StatusCode, Json<ApiResponse<T>>) {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::ok(data))),
        Err(e @ (AppError::Unauthorized | AppError::TokenExpired | AppError::NotLoggedIn)) => {
            (StatusCode::UNAUTHORIZED, Json(ApiResponse::error(e.to_string())))
        }
        Err(e) => {
            error!("Request failed: {}", e);
            (StatusCode::OK, Json(ApiResponse::error(e.to_string())))
        }
    }
}

fn error_response<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (status, Json(ApiResponse::error(message)))
}
