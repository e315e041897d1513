use crate::handlers::users::{create, delete, list, read, update};
use crate::routes::route_not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list).post(create).fallback(route_not_found))
        .route(
            "/users/:id",
            get(read).put(update).delete(delete).fallback(route_not_found),
        )
        .with_state(state)
}
