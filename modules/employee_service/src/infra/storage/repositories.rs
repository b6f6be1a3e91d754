//! SeaORM repository implementation

use crate::contract::{Employee, NewEmployee};
use crate::domain::repository::EmployeesRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmEmployeesRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeesRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeesRepository for SeaOrmEmployeesRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee> {
        let active: entity::ActiveModel = employee.into();

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Employee>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, id: i32, employee: &NewEmployee) -> Result<u64> {
        let active: entity::ActiveModel = employee.into();

        let result = entity::Entity::update_many()
            .set(active)
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(result.rows_affected)
    }
}
