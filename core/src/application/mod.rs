use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{ChefaiConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::Postgres,
        health::PostgresHealthCheckRepository,
        jwt::hs256_codec::Hs256JwtCodec,
        llm::provider::ProviderClient,
        meal_plan_book::repositories::saved_meal_plan_repository::PostgresSavedMealPlanRepository,
        recipe_book::repositories::saved_recipe_repository::PostgresSavedRecipeRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

pub type ChefaiService = Service<
    PostgresUserRepository,
    PostgresSavedRecipeRepository,
    PostgresSavedMealPlanRepository,
    Argon2HasherRepository,
    Hs256JwtCodec,
    PostgresHealthCheckRepository,
    ProviderClient,
>;

/// Connects to the database, runs migrations and wires every adapter.
pub async fn create_service(config: ChefaiConfig) -> Result<ChefaiService, CoreError> {
    let postgres = Postgres::new(&config.database).await?;

    Ok(create_service_with_db(&config, postgres.get_db()))
}

/// Wires the adapters around an existing connection. No I/O happens here.
pub fn create_service_with_db(config: &ChefaiConfig, db: DatabaseConnection) -> ChefaiService {
    Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresSavedRecipeRepository::new(db.clone()),
        PostgresSavedMealPlanRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        Hs256JwtCodec::new(&config.auth),
        PostgresHealthCheckRepository::new(db),
        ProviderClient::from_config(&config.llm),
    )
}
