use super::handlers::change_password::{__path_change_password, change_password};
use super::handlers::delete_favorite_recipe::{
    __path_delete_favorite_recipe, delete_favorite_recipe,
};
use super::handlers::delete_meal_plan::{__path_delete_meal_plan, delete_meal_plan};
use super::handlers::delete_saved_recipe::{__path_delete_saved_recipe, delete_saved_recipe};
use super::handlers::favorite_recipe::{__path_favorite_recipe, favorite_recipe};
use super::handlers::get_favorite_recipes::{__path_get_favorite_recipes, get_favorite_recipes};
use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::get_saved_meal_plans::{__path_get_saved_meal_plans, get_saved_meal_plans};
use super::handlers::get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes};
use super::handlers::save_meal_plan::{__path_save_meal_plan, save_meal_plan};
use super::handlers::save_recipe::{__path_save_recipe, save_recipe};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_profile,
    update_profile,
    change_password,
    save_recipe,
    favorite_recipe,
    get_saved_recipes,
    get_favorite_recipes,
    delete_saved_recipe,
    delete_favorite_recipe,
    save_meal_plan,
    get_saved_meal_plans,
    delete_meal_plan
))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/user/profile"),
            get(get_profile).put(update_profile),
        )
        .route(
            &format!("{root_path}/user/change-password"),
            put(change_password),
        )
        .route(&format!("{root_path}/user/recipes/save"), post(save_recipe))
        .route(
            &format!("{root_path}/user/recipes/favorite"),
            post(favorite_recipe),
        )
        .route(
            &format!("{root_path}/user/recipes/saved"),
            get(get_saved_recipes),
        )
        .route(
            &format!("{root_path}/user/recipes/favorites"),
            get(get_favorite_recipes),
        )
        .route(
            &format!("{root_path}/user/recipes/saved/{{recipe_id}}"),
            delete(delete_saved_recipe),
        )
        .route(
            &format!("{root_path}/user/recipes/favorites/{{recipe_id}}"),
            delete(delete_favorite_recipe),
        )
        .route(
            &format!("{root_path}/user/meal-plans/save"),
            post(save_meal_plan),
        )
        .route(
            &format!("{root_path}/user/meal-plans/saved"),
            get(get_saved_meal_plans),
        )
        .route(
            &format!("{root_path}/user/meal-plans/saved/{{meal_plan_id}}"),
            delete(delete_meal_plan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
