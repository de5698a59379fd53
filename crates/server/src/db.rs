use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sgpa_migration::{Migrator, MigratorTrait};
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Connects and applies pending migrations. Existing rows are kept.
pub async fn init_pool_and_migrate(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect(config).await?;

    Migrator::up(&db, None)
        .await
        .context("failed to apply database migrations")?;
    info!("database schema is up to date");

    Ok(db)
}

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.connection_url());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .context("failed to connect to database")
}

/// Drops every table and reapplies all migrations, discarding all records.
pub async fn reset_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    warn!("dropping and recreating the sgpa schema; all records will be lost");
    Migrator::fresh(db)
        .await
        .context("failed to reset database schema")?;

    Ok(())
}
