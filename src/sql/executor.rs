//! Query executor: run one parameterized statement, get row mappings plus an affected-row count.

use crate::error::AppError;
use crate::sql::SqlParam;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Column, PgPool, Postgres, Row, TypeInfo};

/// Rows returned by a statement and the number of rows it touched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult<T = Value> {
    pub rows: Vec<T>,
    pub row_count: u64,
}

impl QueryResult<Value> {
    pub fn from_rows(rows: Vec<Value>) -> Self {
        let row_count = rows.len() as u64;
        Self { rows, row_count }
    }

    /// Decode each row mapping into a typed row.
    pub fn decode<T: DeserializeOwned>(self) -> Result<QueryResult<T>, AppError> {
        let rows = self
            .rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(QueryResult {
            rows,
            row_count: self.row_count,
        })
    }
}

impl<T> QueryResult<T> {
    /// First row, if any. Single-row routes answer with this even when more rows matched.
    pub fn first(self) -> Option<T> {
        self.rows.into_iter().next()
    }
}

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a statement that yields rows (SELECT or `... RETURNING *`).
    async fn fetch(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError>;

    /// Run a statement for its effect only; `rows` is empty.
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError>;
}

fn build<'q>(sql: &'q str, params: &[SqlParam]) -> sqlx::query::Query<'q, Postgres, PgArguments> {
    let mut query = sqlx::query(sql);
    for p in params {
        query = match p {
            SqlParam::Null => query.bind(None::<String>),
            SqlParam::Text(v) => query.bind(v.clone()),
        };
    }
    query
}

#[async_trait]
impl QueryExecutor for PgPool {
    async fn fetch(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let rows = build(sql, params).fetch_all(self).await?;
        Ok(QueryResult::from_rows(rows.iter().map(row_to_json).collect()))
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let done = build(sql, params).execute(self).await?;
        Ok(QueryResult {
            rows: Vec::new(),
            row_count: done.rows_affected(),
        })
    }
}

fn row_to_json(row: &PgRow) -> Value {
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let v = cell_to_value(row, col.ordinal(), col.type_info().name());
        map.insert(col.name().to_string(), v);
    }
    Value::Object(map)
}

fn cell_to_value(row: &PgRow, idx: usize, type_name: &str) -> Value {
    fn get<'r, T>(row: &'r PgRow, idx: usize) -> Option<T>
    where
        T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
    {
        row.try_get::<Option<T>, _>(idx).ok().flatten()
    }

    let v = match type_name {
        "INT2" => get::<i16>(row, idx).map(Value::from),
        "INT4" => get::<i32>(row, idx).map(Value::from),
        "INT8" => get::<i64>(row, idx).map(Value::from),
        "FLOAT4" => get::<f32>(row, idx).map(|n| Value::from(n as f64)),
        "FLOAT8" => get::<f64>(row, idx).map(Value::from),
        "BOOL" => get::<bool>(row, idx).map(Value::Bool),
        "TIMESTAMPTZ" => get::<chrono::DateTime<chrono::Utc>>(row, idx).map(|d| Value::String(d.to_rfc3339())),
        "TIMESTAMP" => get::<chrono::NaiveDateTime>(row, idx)
            .map(|d| Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        "DATE" => get::<chrono::NaiveDate>(row, idx).map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
        "JSON" | "JSONB" => get::<Value>(row, idx),
        _ => get::<String>(row, idx).map(Value::String),
    };
    v.unwrap_or(Value::Null)
}
