use crate::domain::{
    crypto::ports::HasherRepository,
    generation::ports::LLMClient,
    health::ports::HealthCheckRepository,
    jwt::ports::JwtCodec,
    meal_plan_book::ports::SavedMealPlanRepository,
    recipe_book::ports::SavedRecipeRepository,
    user::ports::UserRepository,
};

/// Application service. Every `*Service` trait of the domain is implemented
/// on this struct so the HTTP layer only ever holds one value.
#[derive(Clone)]
pub struct Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub(crate) user_repository: U,
    pub(crate) saved_recipe_repository: SR,
    pub(crate) saved_meal_plan_repository: MP,
    pub(crate) hasher_repository: H,
    pub(crate) jwt_codec: J,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
}

impl<U, SR, MP, H, J, HC, LLM> Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        saved_recipe_repository: SR,
        saved_meal_plan_repository: MP,
        hasher_repository: H,
        jwt_codec: J,
        health_check_repository: HC,
        llm_client: LLM,
    ) -> Self {
        Self {
            user_repository,
            saved_recipe_repository,
            saved_meal_plan_repository,
            hasher_repository,
            jwt_codec,
            health_check_repository,
            llm_client,
        }
    }
}
