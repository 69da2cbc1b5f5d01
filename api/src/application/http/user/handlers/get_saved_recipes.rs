use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::recipe_book::{
    entities::{RecipeCollection, SavedRecipe},
    ports::RecipeBookService,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipesResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub recipes: Vec<Value>,
}

impl From<Vec<SavedRecipe>> for RecipesResponse {
    fn from(recipes: Vec<SavedRecipe>) -> Self {
        Self {
            success: true,
            recipes: recipes.into_iter().map(SavedRecipe::into_document).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes/saved",
    tag = "user",
    summary = "Saved recipes",
    description = "Lists the saved recipes, oldest first.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = RecipesResponse)
    ),
)]
pub async fn get_saved_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes(identity, RecipeCollection::Saved)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipesResponse::from(recipes)))
}
