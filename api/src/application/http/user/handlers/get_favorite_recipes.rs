use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::handlers::get_saved_recipes::RecipesResponse;
use axum::extract::State;
use chefai_core::domain::recipe_book::{entities::RecipeCollection, ports::RecipeBookService};

#[utoipa::path(
    get,
    path = "/recipes/favorites",
    tag = "user",
    summary = "Favorite recipes",
    description = "Lists the favorite recipes, oldest first.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = RecipesResponse)
    ),
)]
pub async fn get_favorite_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes(identity, RecipeCollection::Favorite)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipesResponse::from(recipes)))
}
