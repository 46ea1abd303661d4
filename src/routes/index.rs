use crate::models::dto::ServiceInfo;
use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(index_handler))]
/// Defines the OpenAPI spec for the root endpoint
pub struct IndexApi;

#[utoipa::path(
    get,
    path = "/",
    tag = "INDEX",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    )
)]
pub async fn index_handler() -> impl IntoResponse {
    Json(ServiceInfo {
        name: "Account REST API Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
