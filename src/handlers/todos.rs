//! `/todos` handlers. The `:id` segment is the owning user's id.

use crate::error::AppError;
use crate::extractors::{JsonBody, RowId};
use crate::response;
use crate::service::TodoService;
use crate::sql::SqlParam;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let user_id = SqlParam::field(&body, "user_id");
    let title = SqlParam::field(&body, "title");
    let row = TodoService::create(state.db.as_ref(), user_id, title)
        .await?
        .first()
        .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
    Ok(response::created("Todo created successfully!", row))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let result = TodoService::list(state.db.as_ref()).await?;
    Ok(response::ok("Todos retrieved successfully", result.rows))
}

pub async fn read(
    State(state): State<AppState>,
    RowId(user_id): RowId,
) -> Result<impl IntoResponse, AppError> {
    let row = TodoService::get_one(state.db.as_ref(), &user_id)
        .await?
        .first()
        .ok_or_else(|| AppError::NotFound("Todos not found".into()))?;
    Ok(response::ok("Todos retrieved successfully!!", row))
}

pub async fn update(
    State(state): State<AppState>,
    RowId(user_id): RowId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let title = SqlParam::field(&body, "title");
    let completed = SqlParam::field(&body, "completed");
    let row = TodoService::update(state.db.as_ref(), title, completed, &user_id)
        .await?
        .first()
        .ok_or_else(|| AppError::NotFound("Todos not found!!".into()))?;
    Ok(response::ok("Todos updated successfully!!", row))
}

pub async fn delete(
    State(state): State<AppState>,
    RowId(user_id): RowId,
) -> Result<impl IntoResponse, AppError> {
    let result = TodoService::delete(state.db.as_ref(), &user_id).await?;
    if result.row_count == 0 {
        return Err(AppError::NotFound("Todo not found!!".into()));
    }
    Ok(response::ok("Todo deleted successfully!!", result.rows))
}
