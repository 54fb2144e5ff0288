mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use quill_core::Repository;
use quill_gateway::{App, AppState};
use quill_service::PostService;
use quill_storage::{InMemoryRepository, MySqlRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    quill_telemetry::init(config.log_format)?;

    let cors = App::cors(&config.allowed_origin)
        .with_context(|| format!("invalid allowed origin '{}'", config.allowed_origin))?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        allowed_origin = %config.allowed_origin,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, cors, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository =
                MySqlRepository::connect_with(&mysql_dsn, config.mysql_max_connections)
                    .await
                    .context("failed to connect to mysql")?;
            repository
                .ensure_schema()
                .await
                .context("failed to create posts table")?;
            run_server(config.listen_addr, cors, repository).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    cors: CorsLayer,
    repository: R,
) -> anyhow::Result<()> {
    let state = AppState::new(Arc::new(PostService::new(repository)));
    let app = App::router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
