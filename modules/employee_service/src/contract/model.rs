//! Contract models for employee service
//!
//! These models are transport-agnostic and shared by the REST layer,
//! the domain service and the storage layer.

use rust_decimal::Decimal;

/// Persisted employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Server-assigned identifier (serial)
    pub id: i32,
    /// Employee name
    pub name: String,
    /// Job position
    pub position: String,
    /// Salary with two decimal places
    pub salary: Decimal,
}

/// Mutable employee fields, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub salary: Decimal,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, position: impl Into<String>, salary: Decimal) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary,
        }
    }

    /// Attach a store-assigned id
    pub fn into_employee(self, id: i32) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            salary: self.salary,
        }
    }
}
