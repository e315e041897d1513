//! Statements against `users`.

use crate::error::AppError;
use crate::model::User;
use crate::sql::{QueryExecutor, QueryResult, SqlParam};

pub struct UserService;

impl UserService {
    /// Insert one user. Returns the created row.
    pub async fn create(
        db: &dyn QueryExecutor,
        name: SqlParam,
        email: SqlParam,
    ) -> Result<QueryResult<User>, AppError> {
        db.fetch(
            "INSERT INTO users(name, email) VALUES ($1, $2) RETURNING *",
            &[name, email],
        )
        .await?
        .decode()
    }

    /// All users in database order.
    pub async fn list(db: &dyn QueryExecutor) -> Result<QueryResult<User>, AppError> {
        db.fetch("SELECT * FROM users", &[]).await?.decode()
    }

    pub async fn get_one(db: &dyn QueryExecutor, id: &str) -> Result<QueryResult<User>, AppError> {
        db.fetch("SELECT * FROM users WHERE id = $1::int", &[SqlParam::from(id)])
            .await?
            .decode()
    }

    /// Overwrite name and email. Zero rows means no user had this id.
    pub async fn update(
        db: &dyn QueryExecutor,
        name: SqlParam,
        email: SqlParam,
        id: &str,
    ) -> Result<QueryResult<User>, AppError> {
        db.fetch(
            "UPDATE users SET name = $1, email = $2 WHERE id = $3::int RETURNING *",
            &[name, email, SqlParam::from(id)],
        )
        .await?
        .decode()
    }

    /// Delete by id; the database cascades to the user's todos.
    pub async fn delete(db: &dyn QueryExecutor, id: &str) -> Result<QueryResult<User>, AppError> {
        db.fetch("DELETE FROM users WHERE id = $1::int RETURNING *", &[SqlParam::from(id)])
            .await?
            .decode()
    }
}
