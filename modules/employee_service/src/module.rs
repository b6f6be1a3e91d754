//! Module wiring: database gateway -> repository -> service -> routes

use crate::config::{Config, DatabaseConfig};
use crate::domain::Service;
use crate::infra::storage::{db, SeaOrmEmployeesRepository};
use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Employee service module
pub struct EmployeeServiceModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl EmployeeServiceModule {
    /// Connect to the database, ensure the schema and build the service.
    /// Any failure here is fatal to startup.
    pub async fn init(config: &Config, db_config: &DatabaseConfig) -> Result<Self> {
        let conn = db::connect(db_config).await?;
        db::ensure_schema(&conn).await?;

        Ok(Self::with_connection(Arc::new(conn), config))
    }

    /// Build the module on an already prepared connection
    pub fn with_connection(db: Arc<DatabaseConnection>, config: &Config) -> Self {
        let repo = Arc::new(SeaOrmEmployeesRepository::new(db.clone()));
        let service = Arc::new(Service::new(repo, config));

        tracing::info!(
            db_call_timeout = ?config.db_call_timeout,
            "Employee service initialized"
        );
        Self { db, service }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering employee service REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }

    /// Close the connection pool
    pub async fn shutdown(self) -> Result<()> {
        // closing a clone closes the shared pool
        let conn = (*self.db).clone();
        conn.close().await.context("failed to close database pool")?;
        tracing::info!("Database pool closed");
        Ok(())
    }
}
