use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{
        entities::{MealPlan, Recipe},
        errors::GenerationError,
        value_objects::{CompletionOptions, IngredientSet, MealPlanPreferences},
    },
};

/// A single text-completion call against whichever provider is configured.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        prompt: String,
        options: CompletionOptions,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait GenerationService: Send + Sync {
    fn generate_recipes(
        &self,
        ingredients: IngredientSet,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn generate_meal_plan(
        &self,
        preferences: MealPlanPreferences,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
