use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{extraction::PayloadKind, prompts},
};

pub const DEFAULT_CUISINE: &str = "Any";

/// Output budget used for recipe generation.
pub const RECIPE_MAX_OUTPUT_TOKENS: u32 = 4096;

/// Output budget used for meal-plan generation. Multi-day plans are long.
pub const MEAL_PLAN_MAX_OUTPUT_TOKENS: u32 = 8000;

/// Ordered, non-empty list of ingredient names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSet(Vec<String>);

impl IngredientSet {
    /// Trims every entry and drops blank ones. Fails when nothing remains.
    pub fn new(ingredients: Vec<String>) -> Result<Self, CoreError> {
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(CoreError::Invalid(
                "Please provide at least one ingredient".to_string(),
            ));
        }

        Ok(Self(ingredients))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanPreferences {
    pub dietary_restrictions: Vec<String>,
    pub daily_calorie_goal: u32,
    pub number_of_days: u32,
    pub meals_per_day: u32,
    pub cuisine_preference: String,
}

impl MealPlanPreferences {
    pub fn has_cuisine_preference(&self) -> bool {
        let cuisine = self.cuisine_preference.trim();
        !cuisine.is_empty() && cuisine != DEFAULT_CUISINE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Recipes(IngredientSet),
    MealPlan(MealPlanPreferences),
}

impl GenerationRequest {
    pub fn prompt(&self) -> String {
        match self {
            GenerationRequest::Recipes(ingredients) => prompts::build_recipe_prompt(ingredients),
            GenerationRequest::MealPlan(preferences) => {
                prompts::build_meal_plan_prompt(preferences)
            }
        }
    }

    pub fn payload_kind(&self) -> PayloadKind {
        match self {
            GenerationRequest::Recipes(_) => PayloadKind::Array,
            GenerationRequest::MealPlan(_) => PayloadKind::Object,
        }
    }

    pub fn completion_options(&self) -> CompletionOptions {
        let max_output_tokens = match self {
            GenerationRequest::Recipes(_) => RECIPE_MAX_OUTPUT_TOKENS,
            GenerationRequest::MealPlan(_) => MEAL_PLAN_MAX_OUTPUT_TOKENS,
        };

        CompletionOptions { max_output_tokens }
    }
}

/// Per-call knobs passed to the provider client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOptions {
    pub max_output_tokens: u32,
}
