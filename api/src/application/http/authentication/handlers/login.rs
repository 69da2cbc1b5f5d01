use crate::application::http::authentication::handlers::register::AuthResponse;
use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::authentication::{ports::AuthService, value_objects::LoginInput};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Login",
    description = "Exchanges email and password for a bearer token.",
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<AuthResponse>, ApiError> {
    let session = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AuthResponse::from(session)))
}
