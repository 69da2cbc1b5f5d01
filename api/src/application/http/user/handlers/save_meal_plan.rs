use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::SaveMealPlanValidator;
use axum::extract::State;
use chefai_core::domain::{
    generation::entities::MealPlan, meal_plan_book::ports::MealPlanBookService,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveMealPlanResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object)]
    pub meal_plan: Value,
}

#[utoipa::path(
    post,
    path = "/meal-plans/save",
    tag = "user",
    summary = "Save meal plan",
    description = "Stores a generated meal plan. The title defaults to the number of days in the plan summary.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = SaveMealPlanResponse),
        (status = 400, description = "The body does not carry a mealPlan array")
    ),
    request_body = SaveMealPlanValidator
)]
pub async fn save_meal_plan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveMealPlanValidator>,
) -> Result<Response<SaveMealPlanResponse>, ApiError> {
    let meal_plan = MealPlan::try_from(payload.meal_plan)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let saved = state
        .service
        .save_meal_plan(identity, meal_plan, payload.title)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveMealPlanResponse {
        success: true,
        message: "Meal plan saved successfully".to_string(),
        meal_plan: saved.into_document(),
    }))
}
