//! Employee server - loads configuration, prepares the database and
//! serves the employee REST API.

mod config;
mod logging;

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use config::AppConfig;
use employee_service::EmployeeServiceModule;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

#[derive(Debug, Parser)]
#[command(name = "employee-server", version, about = "Employee CRUD HTTP service")]
struct Cli {
    /// YAML configuration file; environment variables override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Some(path) = &cli.config {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
    }

    let cfg = AppConfig::load(cli.config.as_deref())?;
    logging::init(&cfg.logging)?;
    tracing::debug!(config = ?cfg, "Configuration loaded");

    if let Err(err) = run(cfg).await {
        tracing::error!(error = ?err, "Employee server failed");
        return Err(err);
    }
    Ok(())
}

async fn run(cfg: AppConfig) -> Result<()> {
    let module = EmployeeServiceModule::init(&cfg.employees, &cfg.database).await?;

    let app = module
        .register_rest(Router::new())
        .layer(TimeoutLayer::new(cfg.server.request_timeout))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "Server is running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    module.shutdown().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
