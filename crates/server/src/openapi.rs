use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Open payload: any JSON object; fields beyond `id` are carried opaquely.
#[derive(ToSchema)]
pub struct CheeseInputDoc {
    pub id: Option<i64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cheeses::list,
        crate::routes::cheeses::create,
    ),
    components(
        schemas(
            HealthResponse,
            CheeseInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cheese")
    )
)]
pub struct ApiDoc;
