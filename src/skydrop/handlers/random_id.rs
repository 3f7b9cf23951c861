use crate::auth::workflow;
use axum::{response::IntoResponse, Json};

#[utoipa::path(
    get,
    path= "/uuid",
    responses (
        (status = 200, description = "Fresh unique id", body = String, content_type = "application/json"),
    ),
    tag= "uuid"
)]
// axum handler for the random id utility
pub async fn random_id() -> impl IntoResponse {
    Json(workflow::random_id())
}
