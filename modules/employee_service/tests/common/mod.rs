//! Common test utilities: in-memory repositories and service/router builders

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use employee_service::api::rest::routes::register_routes;
use employee_service::contract::{Employee, NewEmployee};
use employee_service::domain::{EmployeesRepository, Service};
use employee_service::Config;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory employees table with a serial id counter
#[derive(Clone)]
pub struct MockEmployeesRepo {
    rows: Arc<RwLock<BTreeMap<i32, Employee>>>,
    next_id: Arc<RwLock<i32>>,
    calls: Arc<AtomicUsize>,
}

impl MockEmployeesRepo {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Insert directly, bypassing the service
    pub fn seed(&self, count: usize) {
        for i in 0..count {
            let salary = rust_decimal::Decimal::new(((i as i64) + 1) * 1000, 0);
            let employee = NewEmployee::new(format!("Employee {}", i), format!("SE {}", i), salary);
            let mut next_id = self.next_id.write();
            self.rows
                .write()
                .insert(*next_id, employee.into_employee(*next_id));
            *next_id += 1;
        }
    }

    /// Delete all rows and restart ids at 1
    pub fn clear(&self) {
        self.rows.write().clear();
        *self.next_id.write() = 1;
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    pub fn get(&self, id: i32) -> Option<Employee> {
        self.rows.read().get(&id).cloned()
    }

    /// Number of repository calls made through the trait
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn track(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeesRepository for MockEmployeesRepo {
    async fn insert(&self, employee: &NewEmployee) -> anyhow::Result<Employee> {
        self.track();
        let mut next_id = self.next_id.write();
        let created = employee.clone().into_employee(*next_id);
        self.rows.write().insert(created.id, created.clone());
        *next_id += 1;
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Employee>> {
        self.track();
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Employee>> {
        self.track();
        Ok(self
            .rows
            .read()
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, employee: &NewEmployee) -> anyhow::Result<u64> {
        self.track();
        let mut rows = self.rows.write();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = employee.clone().into_employee(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        self.track();
        Ok(self.rows.write().remove(&id).map_or(0, |_| 1))
    }
}

/// Repository whose every call fails like a lost connection
pub struct FailingRepo;

#[async_trait]
impl EmployeesRepository for FailingRepo {
    async fn insert(&self, _employee: &NewEmployee) -> anyhow::Result<Employee> {
        anyhow::bail!("connection refused: pq: password authentication failed")
    }

    async fn find_by_id(&self, _id: i32) -> anyhow::Result<Option<Employee>> {
        anyhow::bail!("connection refused: pq: password authentication failed")
    }

    async fn list(&self, _limit: u64, _offset: u64) -> anyhow::Result<Vec<Employee>> {
        anyhow::bail!("connection refused: pq: password authentication failed")
    }

    async fn update(&self, _id: i32, _employee: &NewEmployee) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused: pq: password authentication failed")
    }

    async fn delete(&self, _id: i32) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused: pq: password authentication failed")
    }
}

/// Repository that never answers within any reasonable timeout
pub struct StalledRepo;

impl StalledRepo {
    async fn stall() {
        tokio::time::sleep(Duration::from_secs(3600)).await;
    }
}

#[async_trait]
impl EmployeesRepository for StalledRepo {
    async fn insert(&self, _employee: &NewEmployee) -> anyhow::Result<Employee> {
        Self::stall().await;
        anyhow::bail!("unreachable")
    }

    async fn find_by_id(&self, _id: i32) -> anyhow::Result<Option<Employee>> {
        Self::stall().await;
        Ok(None)
    }

    async fn list(&self, _limit: u64, _offset: u64) -> anyhow::Result<Vec<Employee>> {
        Self::stall().await;
        Ok(vec![])
    }

    async fn update(&self, _id: i32, _employee: &NewEmployee) -> anyhow::Result<u64> {
        Self::stall().await;
        Ok(0)
    }

    async fn delete(&self, _id: i32) -> anyhow::Result<u64> {
        Self::stall().await;
        Ok(0)
    }
}

pub fn service_with(repo: Arc<dyn EmployeesRepository>) -> Arc<Service> {
    Arc::new(Service::new(repo, &Config::default()))
}

pub fn create_test_service() -> (Arc<Service>, MockEmployeesRepo) {
    let repo = MockEmployeesRepo::new();
    (service_with(Arc::new(repo.clone())), repo)
}

pub fn router_with(repo: Arc<dyn EmployeesRepository>) -> Router {
    register_routes(Router::new(), service_with(repo))
}

pub fn create_test_router() -> (Router, MockEmployeesRepo) {
    let repo = MockEmployeesRepo::new();
    (router_with(Arc::new(repo.clone())), repo)
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}
