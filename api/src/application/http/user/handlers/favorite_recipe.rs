use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RecipeBodyValidator;
use axum::extract::State;
use chefai_core::domain::{
    generation::entities::Recipe,
    recipe_book::{ports::RecipeBookService, value_objects::FavoriteToggle},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FavoriteRecipeResponse {
    pub success: bool,
    pub message: String,
    pub favorited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub recipe: Option<Value>,
}

impl From<FavoriteToggle> for FavoriteRecipeResponse {
    fn from(toggle: FavoriteToggle) -> Self {
        match toggle {
            FavoriteToggle::Added(saved) => Self {
                success: true,
                message: "Recipe added to favorites".to_string(),
                favorited: true,
                recipe: Some(saved.into_document()),
            },
            FavoriteToggle::Removed => Self {
                success: true,
                message: "Recipe removed from favorites".to_string(),
                favorited: false,
                recipe: None,
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/recipes/favorite",
    tag = "user",
    summary = "Toggle favorite",
    description = "Removes the recipe from favorites when one with the same name is there, adds it otherwise.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = FavoriteRecipeResponse),
        (status = 400, description = "Missing recipe")
    ),
    request_body = RecipeBodyValidator
)]
pub async fn favorite_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecipeBodyValidator>,
) -> Result<Response<FavoriteRecipeResponse>, ApiError> {
    let toggle = state
        .service
        .toggle_favorite(identity, Recipe::new(payload.recipe))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FavoriteRecipeResponse::from(toggle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_favorite_has_no_recipe() {
        let response = FavoriteRecipeResponse::from(FavoriteToggle::Removed);
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["favorited"], false);
        assert!(body.get("recipe").is_none());
    }
}
