use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::meal_plan_book::{entities::SavedMealPlan, ports::MealPlanBookService};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlansResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub meal_plans: Vec<Value>,
}

#[utoipa::path(
    get,
    path = "/meal-plans/saved",
    tag = "user",
    summary = "Saved meal plans",
    description = "Lists the saved meal plans, oldest first.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = MealPlansResponse)
    ),
)]
pub async fn get_saved_meal_plans(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MealPlansResponse>, ApiError> {
    let meal_plans = state
        .service
        .list_meal_plans(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MealPlansResponse {
        success: true,
        meal_plans: meal_plans
            .into_iter()
            .map(SavedMealPlan::into_document)
            .collect(),
    }))
}
