use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub database: String,
    pub latency_ms: u64,
}
