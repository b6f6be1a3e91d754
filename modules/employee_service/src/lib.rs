//! Employee Service Module
//!
//! CRUD over a single `employees` table: JSON over HTTP in, SQL against
//! PostgreSQL, JSON out.

// Public exports
pub mod contract;
pub use contract::{Employee, EmployeeError, NewEmployee};

pub mod config;
pub use config::{Config, DatabaseConfig};

pub mod module;
pub use module::EmployeeServiceModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
