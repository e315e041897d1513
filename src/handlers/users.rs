//! `/users` handlers.

use crate::error::AppError;
use crate::extractors::{JsonBody, RowId};
use crate::response;
use crate::service::UserService;
use crate::sql::SqlParam;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

const NOT_FOUND: &str = "User not found!!";

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let name = SqlParam::field(&body, "name");
    let email = SqlParam::field(&body, "email");
    let row = UserService::create(state.db.as_ref(), name, email)
        .await?
        .first()
        .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
    Ok(response::created("Data Inserted Successfully", row))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let result = UserService::list(state.db.as_ref()).await?;
    Ok(response::ok("Users retrieved successfully", result.rows))
}

pub async fn read(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<impl IntoResponse, AppError> {
    let row = UserService::get_one(state.db.as_ref(), &id)
        .await?
        .first()
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("User retrieved successfully!!", row))
}

pub async fn update(
    State(state): State<AppState>,
    RowId(id): RowId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let row = UserService::update(
        state.db.as_ref(),
        SqlParam::field(&body, "name"),
        SqlParam::field(&body, "email"),
        &id,
    )
    .await?
    .first()
    .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("User updated successfully!!", row))
}

pub async fn delete(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<impl IntoResponse, AppError> {
    let result = UserService::delete(state.db.as_ref(), &id).await?;
    if result.row_count == 0 {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(response::ok("User deleted successfully!!", result.rows))
}
