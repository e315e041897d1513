//! Request logging applied to every matched route.

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!(method = %req.method(), path = %req.uri().path(), "request");
    next.run(req).await
}
