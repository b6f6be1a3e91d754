//! Repository trait for data access
//!
//! Implementation is in infra/storage/repositories.rs

use crate::contract::{Employee, NewEmployee};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for employee records
#[async_trait]
pub trait EmployeesRepository: Send + Sync {
    /// Insert a new employee, the store assigns the id
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee>;

    /// Find an employee by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>>;

    /// List employees ordered by id
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Employee>>;

    /// Replace mutable fields. Returns the number of rows affected.
    async fn update(&self, id: i32, employee: &NewEmployee) -> Result<u64>;

    /// Delete by id. Returns the number of rows affected.
    async fn delete(&self, id: i32) -> Result<u64>;
}
