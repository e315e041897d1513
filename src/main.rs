//! Server: loads settings, bootstraps the schema, serves the users/todos API.

use todo_crud::{app, ensure_database_exists, ensure_tables, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo_crud=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.create_database {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;

    ensure_tables(&pool).await?;
    let state = AppState::new(pool);

    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
