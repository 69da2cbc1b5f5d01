use crate::application::http::recipes::validators::GenerateRecipesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chefai_core::domain::generation::{
    entities::Recipe, ports::GenerationService, value_objects::IngredientSet,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipesResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    summary = "Generate recipes",
    description = "Asks the configured language model for up to five recipes built from the given ingredients.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, description = "No usable ingredient"),
        (status = 502, description = "Provider failure or unusable model output"),
        (status = 503, description = "No provider configured")
    ),
    request_body = GenerateRecipesValidator
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let ingredients = IngredientSet::new(payload.ingredients).map_err(ApiError::from)?;
    info!("Generating recipes for: {}", ingredients.joined());

    let recipes = state
        .service
        .generate_recipes(ingredients)
        .await
        .map_err(|e| ApiError::generation("Failed to generate recipes", e))?;

    Ok(Response::OK(GenerateRecipesResponse {
        success: true,
        recipes,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::application::http::server::http_server::test_support::test_server;

    #[tokio::test]
    async fn test_empty_ingredients_are_rejected() {
        let server = test_server();

        let response = server
            .post("/api/recipes/generate")
            .json(&json!({"ingredients": ["   "]}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "Please provide at least one ingredient"
        );
    }

    #[tokio::test]
    async fn test_generation_without_provider_is_unavailable() {
        let server = test_server();

        let response = server
            .post("/api/recipes/generate")
            .json(&json!({"ingredients": ["chicken", "rice"]}))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.json::<serde_json::Value>()["code"],
            "E_SERVICE_UNAVAILABLE"
        );
    }
}
