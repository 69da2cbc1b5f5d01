use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{MessageResponse, Response};
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::ChangePasswordValidator;
use axum::extract::State;
use chefai_core::domain::user::{ports::UserService, value_objects::ChangePasswordInput};

#[utoipa::path(
    put,
    path = "/change-password",
    tag = "user",
    summary = "Change password",
    description = "Replaces the password after checking the current one.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, description = "Current password is wrong")
    ),
    request_body = ChangePasswordValidator
)]
pub async fn change_password(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ChangePasswordValidator>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .change_password(
            identity,
            ChangePasswordInput {
                current_password: payload.current_password,
                new_password: payload.new_password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        "Password updated successfully",
    )))
}
