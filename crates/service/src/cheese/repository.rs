use async_trait::async_trait;
use sea_orm::{prelude::Json, DatabaseConnection};

use crate::errors::ServiceError;

/// Persistence contract for cheeses: list everything, insert-or-replace one.
#[async_trait]
pub trait CheeseRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<models::cheese::Model>, ServiceError>;
    async fn save(
        &self,
        id: Option<i64>,
        fields: Json,
    ) -> Result<models::cheese::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCheeseRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CheeseRepository for SeaOrmCheeseRepository {
    async fn find_all(&self) -> Result<Vec<models::cheese::Model>, ServiceError> {
        Ok(models::cheese::find_all(&self.db).await?)
    }

    async fn save(
        &self,
        id: Option<i64>,
        fields: Json,
    ) -> Result<models::cheese::Model, ServiceError> {
        Ok(models::cheese::save(&self.db, id, fields).await?)
    }
}
