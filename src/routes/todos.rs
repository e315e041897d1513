use crate::handlers::todos::{create, delete, list, read, update};
use crate::routes::route_not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `:id` on these routes is the owning user's id.
pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list).post(create).fallback(route_not_found))
        .route(
            "/todos/:id",
            get(read).put(update).delete(delete).fallback(route_not_found),
        )
        .with_state(state)
}
