use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /api/health -- returns service and database health. Never fails.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = parksphere_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to ParkSphere API v2.0",
    })
}

/// Health check route, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Root-level welcome route.
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
