use axum::http::StatusCode;

#[utoipa::path(
    get,
    path= "/",
    responses (
        (status = 202, description = "Service is reachable"),
    ),
    tag= "probe"
)]
// axum handler for the connectivity probe
pub async fn check_connection() -> StatusCode {
    StatusCode::ACCEPTED
}
