//! Database and table bootstrap. Every statement is idempotent.

use crate::error::{AppError, ConfigError};
use crate::sql::QueryExecutor;
use sqlx::ConnectOptions;
use std::str::FromStr;

pub const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users(
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(150) UNIQUE NOT NULL,
        age INT,
        phone VARCHAR(15),
        address TEXT,
        created_at TIMESTAMP DEFAULT NOW(),
        updated_at TIMESTAMP DEFAULT NOW()
    )
"#;

pub const CREATE_TODOS: &str = r#"
    CREATE TABLE IF NOT EXISTS todos(
        id SERIAL PRIMARY KEY,
        user_id INT REFERENCES users(id) ON DELETE CASCADE,
        title VARCHAR(200) NOT NULL,
        description TEXT,
        completed BOOLEAN DEFAULT FALSE,
        due_date DATE,
        created_at TIMESTAMP DEFAULT NOW(),
        updated_at TIMESTAMP DEFAULT NOW()
    )
"#;

/// Create `users` then `todos` (todos references users).
pub async fn ensure_tables(db: &dyn QueryExecutor) -> Result<(), AppError> {
    db.execute(CREATE_USERS, &[]).await?;
    db.execute(CREATE_TODOS, &[]).await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?;
    let (base, path_and_query) = url.split_at(path_start);
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let admin_url = match parts.next() {
        Some(query) => format!("{}postgres?{}", base, query),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
