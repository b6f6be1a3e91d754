//! Database gateway - connection, liveness check and schema bootstrap

use super::migrations::Migrator;
use crate::config::{DatabaseConfig, DB_HOST};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open a pooled connection and verify it with a ping
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.connection_url());
    opts.max_connections(cfg.max_connections)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opts).await.with_context(|| {
        format!(
            "failed to connect to database '{}' at {}:{}",
            cfg.name, DB_HOST, cfg.port
        )
    })?;

    if let Err(err) = db.ping().await {
        if let Err(close_err) = db.close().await {
            tracing::warn!(error = %close_err, "Failed to close connection after failed ping");
        }
        return Err(err).context("database liveness check failed");
    }

    tracing::info!(
        database = %cfg.name,
        port = cfg.port,
        max_connections = cfg.max_connections,
        "Connected to database"
    );
    Ok(db)
}

/// Create the employees table if it does not exist
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("failed to create employees table")?;
    tracing::info!("Employee service migrations completed");
    Ok(())
}

/// Delete every employee and restart the id sequence at 1.
/// Test and maintenance use only.
pub async fn clear_all(db: &DatabaseConnection) -> Result<()> {
    db.execute_unprepared("DELETE FROM employees").await?;
    db.execute_unprepared("ALTER SEQUENCE employees_id_seq RESTART WITH 1")
        .await?;
    Ok(())
}
