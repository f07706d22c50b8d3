//! Taskboard HTTP server.
//!
//! Reads configuration (see [`taskboard::config`]), applies the task schema to
//! the configured SQLite database and serves the task API until interrupted.

use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::{
    api,
    config::TaskboardConfig,
    task::{
        adapters::sqlite::{SqliteTaskRepository, build_pool},
        services::TaskLifecycleService,
    },
    telemetry,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let loaded_env_file = TaskboardConfig::load_env_file().wrap_err("read .env file")?;
    let config = TaskboardConfig::load().wrap_err("load configuration")?;
    telemetry::init(&config.logging).wrap_err("install tracing subscriber")?;
    if loaded_env_file {
        info!("loaded environment variables from .env file");
    }

    let pool = build_pool(&config.database.url, config.database.max_connections)
        .wrap_err_with(|| format!("open database {}", config.database.url))?;
    let repository = SqliteTaskRepository::new(pool);
    repository.migrate().await.wrap_err("apply task schema")?;

    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    let app = api::router(service);

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .wrap_err_with(|| format!("bind {}", config.server.bind_address))?;
    info!(address = %listener.local_addr()?, "taskboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("serve HTTP")?;
    info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
