use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::handlers::get_profile::UserResponse;
use crate::application::http::user::validators::UpdateProfileValidator;
use axum::extract::State;
use chefai_core::domain::user::{ports::UserService, value_objects::UpdateProfileInput};

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    summary = "Update profile",
    description = "Updates the name, avatar or theme preference. Omitted fields are left unchanged.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = UserResponse),
        (status = 400, description = "Blank name")
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .update_profile(
            identity,
            UpdateProfileInput {
                name: payload.name,
                avatar: payload.avatar,
                dark_mode: payload.dark_mode,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse {
        success: true,
        user,
    }))
}
