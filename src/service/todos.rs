//! Statements against `todos`.
//!
//! Lookups, updates and deletes match on `user_id`, not the todo's own `id`. Routes expose
//! this as `/todos/:id`, so `:id` names the owning user.

use crate::error::AppError;
use crate::model::Todo;
use crate::sql::{QueryExecutor, QueryResult, SqlParam};

pub struct TodoService;

impl TodoService {
    pub async fn create(
        db: &dyn QueryExecutor,
        user_id: SqlParam,
        title: SqlParam,
    ) -> Result<QueryResult<Todo>, AppError> {
        db.fetch(
            "INSERT INTO todos(user_id, title) VALUES ($1::int, $2) RETURNING *",
            &[user_id, title],
        )
        .await?
        .decode()
    }

    pub async fn list(db: &dyn QueryExecutor) -> Result<QueryResult<Todo>, AppError> {
        db.fetch("SELECT * FROM todos", &[]).await?.decode()
    }

    /// Every todo owned by `user_id`.
    pub async fn get_one(db: &dyn QueryExecutor, user_id: &str) -> Result<QueryResult<Todo>, AppError> {
        db.fetch("SELECT * FROM todos WHERE user_id = $1::int", &[SqlParam::from(user_id)])
            .await?
            .decode()
    }

    /// Sets title and completed on every todo owned by `user_id`.
    pub async fn update(
        db: &dyn QueryExecutor,
        title: SqlParam,
        completed: SqlParam,
        user_id: &str,
    ) -> Result<QueryResult<Todo>, AppError> {
        db.fetch(
            "UPDATE todos SET title = $1, completed = $2::boolean WHERE user_id = $3::int RETURNING *",
            &[title, completed, SqlParam::from(user_id)],
        )
        .await?
        .decode()
    }

    pub async fn delete(db: &dyn QueryExecutor, user_id: &str) -> Result<QueryResult<Todo>, AppError> {
        db.fetch("DELETE FROM todos WHERE user_id = $1::int RETURNING *", &[SqlParam::from(user_id)])
            .await?
            .decode()
    }
}
