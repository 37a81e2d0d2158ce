//! Task list server binary.
//!
//! Connects to `PostgreSQL` once at start-up and serves the task list until
//! interrupted. A failed connection terminates the process.

use anyhow::Context;
use mockable::DefaultClock;
use std::sync::Arc;
use tasklist::{
    config::ServerConfig,
    task::{adapters::postgres::PostgresTaskRepository, services::TaskBoardService},
    telemetry,
    web::{self, AppState, PageRenderer},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load();
    telemetry::init();

    info!(database = %config.database_location(), "connecting to database");
    let database_url = config.database_url();
    let pool_size = config.pool_size;
    let repository = tokio::task::spawn_blocking(move || {
        PostgresTaskRepository::connect(&database_url, pool_size)
    })
    .await
    .context("database connection task panicked")?
    .context("failed to connect to database")?;

    let board = TaskBoardService::new(Arc::new(repository), Arc::new(DefaultClock));
    let pages = PageRenderer::new().context("failed to compile page templates")?;
    let app = web::router(AppState::new(board, pages));

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    web::serve(listener, app).await.context("server error")?;
    Ok(())
}
