use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{MessageResponse, Response};
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chefai_core::domain::meal_plan_book::ports::MealPlanBookService;

#[utoipa::path(
    delete,
    path = "/meal-plans/saved/{meal_plan_id}",
    tag = "user",
    summary = "Delete meal plan",
    description = "Removes a saved meal plan. Unknown ids succeed.",
    security(("bearer" = [])),
    params(
        ("meal_plan_id" = String, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = MessageResponse)
    ),
)]
pub async fn delete_meal_plan(
    Path(meal_plan_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .delete_meal_plan(identity, meal_plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        "Meal plan deleted successfully",
    )))
}
