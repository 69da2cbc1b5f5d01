use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    generation::entities::Recipe,
    recipe_book::{
        entities::{RecipeCollection, SavedRecipe},
        value_objects::FavoriteToggle,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeBookService: Send + Sync {
    fn save_recipe(
        &self,
        identity: Identity,
        recipe: Recipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn toggle_favorite(
        &self,
        identity: Identity,
        recipe: Recipe,
    ) -> impl Future<Output = Result<FavoriteToggle, CoreError>> + Send;

    fn list_recipes(
        &self,
        identity: Identity,
        collection: RecipeCollection,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    /// Removing an id that is not in the collection is not an error.
    fn delete_recipe(
        &self,
        identity: Identity,
        collection: RecipeCollection,
        recipe_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SavedRecipeRepository: Send + Sync {
    /// Oldest first.
    fn list(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    fn find_by_name(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
        name: String,
    ) -> impl Future<Output = Result<Option<SavedRecipe>, CoreError>> + Send;

    fn create(
        &self,
        saved: SavedRecipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn delete_by_recipe_id(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
        recipe_id: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete_by_name(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
        name: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
