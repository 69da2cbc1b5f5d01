use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{MessageResponse, Response};
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chefai_core::domain::recipe_book::{entities::RecipeCollection, ports::RecipeBookService};

#[utoipa::path(
    delete,
    path = "/recipes/saved/{recipe_id}",
    tag = "user",
    summary = "Delete saved recipe",
    description = "Removes a recipe from the saved collection. Unknown ids succeed.",
    security(("bearer" = [])),
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = MessageResponse)
    ),
)]
pub async fn delete_saved_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .delete_recipe(identity, RecipeCollection::Saved, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        "Recipe deleted successfully",
    )))
}
