//! Request body as untyped JSON.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;

/// The body parsed as JSON whatever the Content-Type. An empty body is an empty object,
/// so every field binds as NULL. Field types are left for the database to judge.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Default::default())));
        }
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            })
    }
}
