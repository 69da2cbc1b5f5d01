use crate::application::http::authentication::validators::RegisterValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthSession, RegisterInput},
};
use chefai_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            success: true,
            token: session.token,
            user: session.user,
        }
    }
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account and returns a bearer token for it.",
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, description = "Invalid body"),
        (status = 409, description = "Email already registered")
    ),
    request_body = RegisterValidator
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<AuthResponse>, ApiError> {
    let session = state
        .service
        .register(RegisterInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AuthResponse::from(session)))
}
