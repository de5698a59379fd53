use std::sync::Arc;

use anyhow::{Context, bail};
use sgpa_server::api::{AppState, create_router};
use sgpa_server::repository::SeaOrmRecordRepository;
use sgpa_server::{AppConfig, db};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(bind_addr = %config.bind_addr, database = ?config.database, "configuration loaded");

    match std::env::args().nth(1).as_deref() {
        None | Some("serve") => serve(config).await,
        Some("reset-schema") => reset_schema(config).await,
        Some(other) => bail!("unknown command '{other}', expected 'serve' or 'reset-schema'"),
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    info!("starting sgpa server");
    let db = db::init_pool_and_migrate(&config.database).await?;

    let state = AppState::new(Arc::new(SeaOrmRecordRepository::new(db.clone())));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "server is ready, press Ctrl+C to shut down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await.context("failed to close database pool")?;
    info!("server shutdown complete");
    Ok(())
}

async fn reset_schema(config: AppConfig) -> anyhow::Result<()> {
    let db = db::connect(&config.database).await?;
    db::reset_schema(&db).await?;
    info!("schema reset complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received, stopping server");
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
