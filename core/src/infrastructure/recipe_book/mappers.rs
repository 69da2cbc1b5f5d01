use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::entities::Recipe,
    recipe_book::entities::{RecipeCollection, SavedRecipe},
};
use crate::entity::saved_recipes::Model as SavedRecipeModel;

impl TryFrom<SavedRecipeModel> for SavedRecipe {
    type Error = CoreError;

    fn try_from(model: SavedRecipeModel) -> Result<Self, Self::Error> {
        let collection: RecipeCollection = model.collection.parse().map_err(|e| {
            error!("Corrupt saved recipe row {}: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(SavedRecipe {
            id: model.id,
            recipe_id: model.recipe_id,
            user_id: model.user_id,
            collection,
            name: model.name,
            recipe: Recipe::new(model.recipe),
            saved_at: Utc.from_utc_datetime(&model.saved_at),
        })
    }
}
