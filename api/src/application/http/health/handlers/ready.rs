use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness",
    description = "Pings the database and reports the round-trip latency.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unreachable")
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state
        .service
        .readiness()
        .await
        .map_err(|_| ApiError::ServiceUnavailable("Database is not reachable".to_string()))?;

    Ok(Response::OK(status))
}
