//! SeaORM entity for the employees table

use sea_orm::entity::prelude::*;

/// Employees table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Serial primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub position: String,

    /// numeric(10,2)
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub salary: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
