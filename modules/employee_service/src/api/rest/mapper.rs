//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Employee> for EmployeeDto {
    fn from(employee: contract::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            position: employee.position,
            salary: employee.salary,
        }
    }
}

impl From<CreateEmployeeRequest> for contract::NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            position: req.position,
            salary: req.salary,
        }
    }
}
