//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Employee, NewEmployee};
use sea_orm::ActiveValue::{NotSet, Set};

impl From<entity::Model> for Employee {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            position: entity.position,
            salary: entity.salary,
        }
    }
}

/// Insert shape: id is left to the sequence
impl From<&NewEmployee> for entity::ActiveModel {
    fn from(model: &NewEmployee) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            position: Set(model.position.clone()),
            salary: Set(model.salary),
        }
    }
}
