use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RecipeBodyValidator;
use axum::extract::State;
use chefai_core::domain::{generation::entities::Recipe, recipe_book::ports::RecipeBookService};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object)]
    pub recipe: Value,
}

#[utoipa::path(
    post,
    path = "/recipes/save",
    tag = "user",
    summary = "Save recipe",
    description = "Adds a recipe to the saved collection. A recipe with the same name cannot be saved twice.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = SaveRecipeResponse),
        (status = 400, description = "Missing recipe or already saved")
    ),
    request_body = RecipeBodyValidator
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecipeBodyValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let saved = state
        .service
        .save_recipe(identity, Recipe::new(payload.recipe))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveRecipeResponse {
        success: true,
        message: "Recipe saved successfully".to_string(),
        recipe: saved.into_document(),
    }))
}
