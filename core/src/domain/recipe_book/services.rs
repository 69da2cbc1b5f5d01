use tracing::{info, instrument};

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    generation::{entities::Recipe, ports::LLMClient},
    health::ports::HealthCheckRepository,
    jwt::ports::JwtCodec,
    meal_plan_book::ports::SavedMealPlanRepository,
    recipe_book::{
        entities::{RecipeCollection, SavedRecipe},
        ports::{RecipeBookService, SavedRecipeRepository},
        value_objects::FavoriteToggle,
    },
    user::ports::UserRepository,
};

fn ensure_recipe_document(recipe: &Recipe) -> Result<(), CoreError> {
    if recipe.is_object() {
        Ok(())
    } else {
        Err(CoreError::Invalid("Recipe data is required".to_string()))
    }
}

impl<U, SR, MP, H, J, HC, LLM> RecipeBookService for Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity, recipe), fields(user_id = %identity.id()))]
    async fn save_recipe(&self, identity: Identity, recipe: Recipe) -> Result<SavedRecipe, CoreError> {
        ensure_recipe_document(&recipe)?;

        let saved = SavedRecipe::new(identity.id(), RecipeCollection::Saved, recipe);

        let existing = self
            .saved_recipe_repository
            .find_by_name(identity.id(), RecipeCollection::Saved, saved.name.clone())
            .await?;

        if existing.is_some() {
            return Err(CoreError::Invalid("Recipe already saved".to_string()));
        }

        let saved = self.saved_recipe_repository.create(saved).await?;
        info!(recipe_id = %saved.recipe_id, "Recipe saved");

        Ok(saved)
    }

    #[instrument(skip(self, identity, recipe), fields(user_id = %identity.id()))]
    async fn toggle_favorite(
        &self,
        identity: Identity,
        recipe: Recipe,
    ) -> Result<FavoriteToggle, CoreError> {
        ensure_recipe_document(&recipe)?;

        let favorite = SavedRecipe::new(identity.id(), RecipeCollection::Favorite, recipe);

        let existing = self
            .saved_recipe_repository
            .find_by_name(
                identity.id(),
                RecipeCollection::Favorite,
                favorite.name.clone(),
            )
            .await?;

        if existing.is_some() {
            self.saved_recipe_repository
                .delete_by_name(identity.id(), RecipeCollection::Favorite, favorite.name)
                .await?;
            info!("Recipe removed from favorites");

            return Ok(FavoriteToggle::Removed);
        }

        let favorite = self.saved_recipe_repository.create(favorite).await?;
        info!(recipe_id = %favorite.recipe_id, "Recipe added to favorites");

        Ok(FavoriteToggle::Added(favorite))
    }

    async fn list_recipes(
        &self,
        identity: Identity,
        collection: RecipeCollection,
    ) -> Result<Vec<SavedRecipe>, CoreError> {
        self.saved_recipe_repository
            .list(identity.id(), collection)
            .await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn delete_recipe(
        &self,
        identity: Identity,
        collection: RecipeCollection,
        recipe_id: String,
    ) -> Result<(), CoreError> {
        let removed = self
            .saved_recipe_repository
            .delete_by_recipe_id(identity.id(), collection, recipe_id)
            .await?;

        info!(removed, "Recipe deleted from {}", collection);
        Ok(())
    }
}
