//! todo-crud: users and todos over HTTP, one SQL statement per route.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError};
pub use response::{created, error_body, ok, Envelope};
pub use routes::{app, common_routes, todo_routes, user_routes};
pub use service::{TodoService, UserService};
pub use settings::Settings;
pub use sql::{QueryExecutor, QueryResult, SqlParam};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
