//! Shared application state for all routes.

use crate::sql::QueryExecutor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Long-lived pool handle; each query checks a connection out and back in.
    pub db: Arc<dyn QueryExecutor>,
}

impl AppState {
    pub fn new(db: impl QueryExecutor + 'static) -> Self {
        Self { db: Arc::new(db) }
    }
}
