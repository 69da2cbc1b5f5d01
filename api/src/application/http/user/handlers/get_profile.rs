use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::user::{entities::User, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "user",
    summary = "Get profile",
    description = "Returns the profile of the authenticated user.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse {
        success: true,
        user,
    }))
}
