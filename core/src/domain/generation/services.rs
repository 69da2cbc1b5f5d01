use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    generation::{
        entities::{MealPlan, Recipe},
        errors::GenerationError,
        extraction::extract_json,
        ports::{GenerationService, LLMClient},
        shape::{validate_meal_plan, validate_recipes},
        value_objects::{GenerationRequest, IngredientSet, MealPlanPreferences},
    },
    health::ports::HealthCheckRepository,
    jwt::ports::JwtCodec,
    meal_plan_book::ports::SavedMealPlanRepository,
    recipe_book::ports::SavedRecipeRepository,
    user::ports::UserRepository,
};

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
    /// Prompt, one completion, then extraction. Shape checks are left to the caller.
    async fn run_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<serde_json::Value, GenerationError> {
        let completion = self
            .llm_client
            .complete(request.prompt(), request.completion_options())
            .await
            .inspect_err(|e| error!("LLM completion failed: {}", e))?;

        extract_json(&completion, request.payload_kind())
    }
}

impl<U, SR, MP, H, J, HC, LLM> GenerationService for Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, ingredients), fields(ingredient_count = ingredients.as_slice().len()))]
    async fn generate_recipes(&self, ingredients: IngredientSet) -> Result<Vec<Recipe>, CoreError> {
        let request = GenerationRequest::Recipes(ingredients);

        let value = self.run_generation(&request).await?;
        let recipes = validate_recipes(value).inspect_err(|e| error!("{}", e))?;

        info!("Generated {} recipes", recipes.len());
        Ok(recipes)
    }

    #[instrument(
        skip(self, preferences),
        fields(days = preferences.number_of_days, meals_per_day = preferences.meals_per_day)
    )]
    async fn generate_meal_plan(
        &self,
        preferences: MealPlanPreferences,
    ) -> Result<MealPlan, CoreError> {
        let request = GenerationRequest::MealPlan(preferences);

        let value = self.run_generation(&request).await?;
        let meal_plan = validate_meal_plan(value).inspect_err(|e| error!("{}", e))?;

        info!("Generated meal plan with {} days", meal_plan.days().len());
        Ok(meal_plan)
    }
}
