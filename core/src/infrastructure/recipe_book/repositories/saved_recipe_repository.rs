use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe_book::{
        entities::{RecipeCollection, SavedRecipe},
        ports::SavedRecipeRepository,
    },
};
use crate::entity::saved_recipes::{
    ActiveModel as SavedRecipeActiveModel, Column as SavedRecipeColumn,
    Entity as SavedRecipeEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSavedRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresSavedRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SavedRecipeRepository for PostgresSavedRecipeRepository {
    async fn list(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
    ) -> Result<Vec<SavedRecipe>, CoreError> {
        SavedRecipeEntity::find()
            .filter(SavedRecipeColumn::UserId.eq(user_id))
            .filter(SavedRecipeColumn::Collection.eq(collection.as_str()))
            .order_by_asc(SavedRecipeColumn::SavedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list {} recipes: {}", collection, e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(SavedRecipe::try_from)
            .collect()
    }

    async fn find_by_name(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
        name: String,
    ) -> Result<Option<SavedRecipe>, CoreError> {
        SavedRecipeEntity::find()
            .filter(SavedRecipeColumn::UserId.eq(user_id))
            .filter(SavedRecipeColumn::Collection.eq(collection.as_str()))
            .filter(SavedRecipeColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find recipe by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(SavedRecipe::try_from)
            .transpose()
    }

    async fn create(&self, saved: SavedRecipe) -> Result<SavedRecipe, CoreError> {
        let model = SavedRecipeEntity::insert(SavedRecipeActiveModel {
            id: Set(saved.id),
            recipe_id: Set(saved.recipe_id),
            user_id: Set(saved.user_id),
            collection: Set(saved.collection.as_str().to_string()),
            name: Set(saved.name),
            recipe: Set(saved.recipe.into_value()),
            saved_at: Set(saved.saved_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to save recipe: {}", e);
            CoreError::InternalServerError
        })?;

        SavedRecipe::try_from(model)
    }

    async fn delete_by_recipe_id(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
        recipe_id: String,
    ) -> Result<u64, CoreError> {
        let result = SavedRecipeEntity::delete_many()
            .filter(SavedRecipeColumn::UserId.eq(user_id))
            .filter(SavedRecipeColumn::Collection.eq(collection.as_str()))
            .filter(SavedRecipeColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn delete_by_name(
        &self,
        user_id: Uuid,
        collection: RecipeCollection,
        name: String,
    ) -> Result<u64, CoreError> {
        let result = SavedRecipeEntity::delete_many()
            .filter(SavedRecipeColumn::UserId.eq(user_id))
            .filter(SavedRecipeColumn::Collection.eq(collection.as_str()))
            .filter(SavedRecipeColumn::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
