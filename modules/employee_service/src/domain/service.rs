//! Domain service - business logic orchestration

use super::repository::EmployeesRepository;
use super::validation::{page_window, validate_new_employee};
use crate::config::Config;
use crate::contract::{Employee, EmployeeError, NewEmployee};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Domain service for employee management
pub struct Service {
    repo: Arc<dyn EmployeesRepository>,
    db_call_timeout: Duration,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn EmployeesRepository>, config: &Config) -> Self {
        Self {
            repo,
            db_call_timeout: config.db_call_timeout,
        }
    }

    /// Create an employee; the store assigns the id
    pub async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let employee = validate_new_employee(employee)?;

        let created = self.call("create", self.repo.insert(&employee)).await?;
        tracing::debug!(id = created.id, "Employee created");
        Ok(created)
    }

    /// Get an employee by id
    pub async fn get_by_id(&self, id: i32) -> Result<Employee, EmployeeError> {
        self.call("get_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or(EmployeeError::NotFound { id })
    }

    /// List one page of employees ordered by id
    pub async fn list(&self, page: u64, size: u64) -> Result<Vec<Employee>, EmployeeError> {
        let (limit, offset) = page_window(page, size)?;
        self.call("list", self.repo.list(limit, offset)).await
    }

    /// Replace the mutable fields of an employee
    pub async fn update(&self, id: i32, employee: NewEmployee) -> Result<(), EmployeeError> {
        let employee = validate_new_employee(employee)?;

        let affected = self.call("update", self.repo.update(id, &employee)).await?;
        if affected == 0 {
            return Err(EmployeeError::NotFound { id });
        }
        tracing::debug!(id, "Employee updated");
        Ok(())
    }

    /// Delete an employee
    pub async fn delete(&self, id: i32) -> Result<(), EmployeeError> {
        let affected = self.call("delete", self.repo.delete(id)).await?;
        if affected == 0 {
            return Err(EmployeeError::NotFound { id });
        }
        tracing::debug!(id, "Employee deleted");
        Ok(())
    }

    /// Run a repository call under the configured timeout.
    /// Store errors and timeouts are logged here and collapse to `Internal`.
    async fn call<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T, EmployeeError> {
        match tokio::time::timeout(self.db_call_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                tracing::error!(operation, error = ?err, "Employee store call failed");
                Err(EmployeeError::Internal)
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout = ?self.db_call_timeout,
                    "Employee store call timed out"
                );
                Err(EmployeeError::Internal)
            }
        }
    }
}
