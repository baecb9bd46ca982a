use std::sync::Arc;

use sea_orm::prelude::Json;
use tracing::{info, instrument};

use crate::cheese::repository::CheeseRepository;
use crate::errors::ServiceError;

/// Pass-through application service; no business rules live here.
pub struct CheeseService<R: CheeseRepository> {
    repo: Arc<R>,
}

impl<R: CheeseRepository> CheeseService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<models::cheese::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, fields))]
    pub async fn add_cheese(
        &self,
        id: Option<i64>,
        fields: Json,
    ) -> Result<models::cheese::Model, ServiceError> {
        let saved = self.repo.save(id, fields).await?;
        info!(id = saved.id, "cheese saved");
        Ok(saved)
    }
}
