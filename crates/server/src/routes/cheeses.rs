use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use service::cheese::{repository::SeaOrmCheeseRepository, service::CheeseService};

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerState {
    pub cheeses: Arc<CheeseService<SeaOrmCheeseRepository>>,
}

/// Incoming cheese payload: identifier optional, remaining fields opaque.
#[derive(Debug, Deserialize, Serialize)]
pub struct CheeseInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: serde_json::Value,
}

#[utoipa::path(
    get, path = "/cheese", tag = "cheese",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::cheese::Model>>, JsonApiError> {
    match state.cheeses.get_all().await {
        Ok(list) => { info!(count = list.len(), "list cheeses"); Ok(Json(list)) }
        Err(e) => {
            error!(err = %e, "list cheeses failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    post, path = "/cheese/new", tag = "cheese",
    request_body = crate::openapi::CheeseInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CheeseInput>,
) -> Result<Json<models::cheese::Model>, JsonApiError> {
    info!(has_id = input.id.is_some(), "cheese_create_request");
    match state.cheeses.add_cheese(input.id, input.fields).await {
        Ok(m) => { info!(id = m.id, "created cheese"); Ok(Json(m)) }
        Err(e) => {
            error!(err = %e, "create cheese failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}
