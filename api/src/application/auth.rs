use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use chefai_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Resolves the bearer token into an [`Identity`] stored in the request
/// extensions. Requests without a usable token are rejected with 401.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Access denied. No token provided.".to_string()))?;

    let identity = state.service.authorize(token).await.map_err(|e| {
        debug!("Token rejected: {}", e);
        match ApiError::from(e) {
            ApiError::InternalServerError(message) => ApiError::InternalServerError(message),
            _ => ApiError::Unauthorized("Invalid token".to_string()),
        }
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// The caller resolved by [`auth`]. Only usable behind that middleware.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
