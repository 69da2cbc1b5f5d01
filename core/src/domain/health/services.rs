use tracing::error;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    generation::ports::LLMClient,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    jwt::ports::JwtCodec,
    meal_plan_book::ports::SavedMealPlanRepository,
    recipe_book::ports::SavedRecipeRepository,
    user::ports::UserRepository,
};

impl<U, SR, MP, H, J, HC, LLM> HealthCheckService for Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self
            .health_check_repository
            .health()
            .await
            .inspect_err(|e| error!("Database is not reachable: {}", e))?;

        Ok(DatabaseHealthStatus {
            status: "ready".to_string(),
            database: "postgres".to_string(),
            latency_ms,
        })
    }
}
