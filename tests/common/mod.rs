//! Scripted query executor: replays canned replies and records every statement.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{self, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use todo_crud::{AppError, AppState, QueryExecutor, QueryResult, SqlParam};

pub enum Reply {
    Rows(Vec<Value>),
    Affected(u64),
    Fail(&'static str),
}

#[derive(Default)]
pub struct ScriptedExecutor {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(String, Vec<SqlParam>)>>,
}

impl ScriptedExecutor {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Vec<SqlParam>)> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Rows(rows)) => Ok(QueryResult::from_rows(rows)),
            Some(Reply::Affected(n)) => Ok(QueryResult {
                rows: Vec::new(),
                row_count: n,
            }),
            Some(Reply::Fail(msg)) => Err(AppError::Db(sqlx::Error::Protocol(msg.to_string()))),
            None => panic!("unexpected statement: {}", sql),
        }
    }
}

#[async_trait]
impl QueryExecutor for ScriptedExecutor {
    async fn fetch(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError> {
        self.next(sql, params)
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, AppError> {
        self.next(sql, params)
    }
}

pub fn state(db: &Arc<ScriptedExecutor>) -> AppState {
    AppState { db: db.clone() }
}

pub fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn user_row(id: i32, name: &str, email: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": email,
        "age": null,
        "phone": null,
        "address": null,
        "created_at": "2025-03-01T10:00:00.000000",
        "updated_at": "2025-03-01T10:00:00.000000"
    })
}

pub fn todo_row(id: i32, user_id: i32, title: &str, completed: bool) -> Value {
    serde_json::json!({
        "id": id,
        "user_id": user_id,
        "title": title,
        "description": null,
        "completed": completed,
        "due_date": null,
        "created_at": "2025-03-01T10:00:00.000000",
        "updated_at": "2025-03-01T10:00:00.000000"
    })
}

/// Collects formatted `tracing` output for the current thread while the guard lives.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}
