use crate::{
    auth::{token::TokenIssuer, workflow},
    skydrop::handlers::{user_login::TokenResponse, valid_email},
    users::{Role, UserStore},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserRegister {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Accepted for wire compatibility and ignored: accounts created through
    /// registration are always role USER.
    #[serde(default)]
    pub role: Option<Role>,
}

#[utoipa::path(
    post,
    path= "/user",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", body = [TokenResponse], content_type = "application/json"),
        (status = 400, description = "Invalid input or email already registered", body = String),
    ),
    tag= "register"
)]
// axum handler for registration
#[instrument(skip_all)]
pub async fn register(
    store: Extension<Arc<dyn UserStore>>,
    tokens: Extension<Arc<TokenIssuer>>,
    payload: Option<Json<UserRegister>>,
) -> impl IntoResponse {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!(email = %user.email, "registration attempt");

    if !valid_email(&user.email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    // user.role is deliberately not forwarded
    match workflow::register(&*store.0, &tokens.0, &user.email, &user.password, &user.name).await {
        Ok(token) => (StatusCode::CREATED, Json(TokenResponse { token })).into_response(),
        Err(err) => err.into_response(),
    }
}
