//! Layered server configuration
//!
//! Precedence, lowest first: built-in defaults, optional YAML file,
//! `EMPLOYEES_*` variables (nested with `__`), then the flat
//! `DB_*`/`SERVER_PORT` variables.

use anyhow::{Context, Result};
use employee_service::{Config as EmployeesConfig, DatabaseConfig};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Flat environment variables and the config keys they populate
const FLAT_ENV: &[(&str, &str)] = &[
    ("DB_USERNAME", "database.username"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DB_PORT", "database.port"),
    ("SERVER_PORT", "server.port"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Employee module settings
    #[serde(default)]
    pub employees: EmployeesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Whole-request timeout; expired requests get 408
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_server_port() -> u16 {
    8080
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "info" or "employee_service=debug,info"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        let flat_keys: Vec<&str> = FLAT_ENV.iter().map(|(var, _)| *var).collect();
        figment
            .merge(Env::prefixed("EMPLOYEES_").split("__"))
            .merge(Env::raw().only(&flat_keys).map(|key| {
                FLAT_ENV
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map(|(_, mapped)| (*mapped).into())
                    .unwrap_or_else(|| key.into())
            }))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("invalid configuration")
    }
}
