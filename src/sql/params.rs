//! Positional parameters for the query executor.
//!
//! Every value travels as text; statements cast placeholders (`$1::int`, `$2::boolean`) so
//! PostgreSQL coerces the value or rejects it with its own error.

use serde::Serialize;
use serde_json::Value;

/// A value bound to a `$n` placeholder.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Null,
    Text(String),
}

impl SqlParam {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => SqlParam::Null,
            Value::String(s) => SqlParam::Text(s.clone()),
            Value::Bool(b) => SqlParam::Text(b.to_string()),
            Value::Number(n) => SqlParam::Text(n.to_string()),
            Value::Array(_) | Value::Object(_) => SqlParam::Text(v.to_string()),
        }
    }

    /// `body[key]`, or NULL when the body has no such field (or is not an object).
    pub fn field(body: &Value, key: &str) -> Self {
        body.get(key).map(Self::from_json).unwrap_or(SqlParam::Null)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}
