//! Common routes: banner, health, readiness, and the catch-all 404.

use crate::response::{self, error_body};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

pub const BANNER: &str = "Hello Next Level Developers!!!!";

#[derive(Serialize)]
struct RouteNotFound {
    success: bool,
    message: &'static str,
    path: String,
}

async fn banner() -> &'static str {
    BANNER
}

async fn health() -> Response {
    response::ok("Service is up", ()).into_response()
}

/// 200 once `SELECT 1` round-trips; 503 with the database's message otherwise.
async fn ready(State(state): State<AppState>) -> Response {
    match state.db.fetch("SELECT 1", &[]).await {
        Ok(_) => response::ok("Database reachable", ()).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(error_body(e.client_message()))).into_response()
        }
    }
}

/// Fallback for any path, or any method on a known path, that no handler serves.
pub async fn route_not_found(uri: Uri) -> (StatusCode, Json<impl Serialize>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            success: false,
            message: "Route not found",
            path: uri.path().to_string(),
        }),
    )
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner).fallback(route_not_found))
        .route("/health", get(health).fallback(route_not_found))
        .route("/ready", get(ready).fallback(route_not_found))
        .with_state(state)
}
