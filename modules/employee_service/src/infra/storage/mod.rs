//! Storage layer - database gateway, entities and repositories

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

pub use repositories::SeaOrmEmployeesRepository;
