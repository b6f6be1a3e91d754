//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::EmployeesRepository;
pub use service::Service;
