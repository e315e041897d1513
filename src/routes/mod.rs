//! Router assembly.

mod common;
mod todos;
mod users;

pub use common::{common_routes, route_not_found, BANNER};
pub use todos::todo_routes;
pub use users::user_routes;

use crate::middleware::log_request;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Request bodies above this are rejected with 413.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Every route, with request logging on matched routes and a JSON 404 for the rest.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(todo_routes(state))
        .route_layer(middleware::from_fn(log_request))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
}
