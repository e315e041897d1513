//! Extract the raw `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `:id` segment of `/users/:id` and `/todos/:id`, unparsed. Statements cast it
/// (`$1::int`), so a malformed id fails in the database like any other bad value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;
        Ok(RowId(raw))
    }
}
