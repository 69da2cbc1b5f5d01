use crate::application::http::meal_planner::validators::GenerateMealPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::generation::{
    entities::MealPlan, ports::GenerationService, value_objects::MealPlanPreferences,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub meal_plan: MealPlan,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "meal-planner",
    summary = "Generate meal plan",
    description = "Asks the configured language model for a multi-day meal plan matching the preferences.",
    responses(
        (status = 200, body = GenerateMealPlanResponse),
        (status = 400, description = "Preferences out of range"),
        (status = 502, description = "Provider failure or unusable model output"),
        (status = 503, description = "No provider configured")
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let preferences = MealPlanPreferences::try_from(payload)?;
    info!(
        "Generating meal plan: {} days, {} meals/day, {} calories/day",
        preferences.number_of_days, preferences.meals_per_day, preferences.daily_calorie_goal
    );

    let meal_plan = state
        .service
        .generate_meal_plan(preferences)
        .await
        .map_err(|e| ApiError::generation("Failed to generate meal plan", e))?;

    Ok(Response::OK(GenerateMealPlanResponse {
        success: true,
        meal_plan,
    }))
}
