//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    /// The request body could not be read or parsed.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("row decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected { status, .. } => *status,
            AppError::Config(_) | AppError::Db(_) | AppError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the client. Database errors carry the server's raw text.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Db(sqlx::Error::Database(e)) => e.message().to_string(),
            AppError::Db(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(error_body(self.client_message()))).into_response()
    }
}
