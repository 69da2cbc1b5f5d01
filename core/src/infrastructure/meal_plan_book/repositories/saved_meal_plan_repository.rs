use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan_book::{entities::SavedMealPlan, ports::SavedMealPlanRepository},
};
use crate::entity::saved_meal_plans::{
    ActiveModel as SavedMealPlanActiveModel, Column as SavedMealPlanColumn,
    Entity as SavedMealPlanEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSavedMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresSavedMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SavedMealPlanRepository for PostgresSavedMealPlanRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<SavedMealPlan>, CoreError> {
        SavedMealPlanEntity::find()
            .filter(SavedMealPlanColumn::UserId.eq(user_id))
            .order_by_asc(SavedMealPlanColumn::SavedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list meal plans: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(SavedMealPlan::try_from)
            .collect()
    }

    async fn create(&self, saved: SavedMealPlan) -> Result<SavedMealPlan, CoreError> {
        let model = SavedMealPlanEntity::insert(SavedMealPlanActiveModel {
            id: Set(saved.id),
            meal_plan_id: Set(saved.meal_plan_id),
            user_id: Set(saved.user_id),
            title: Set(saved.title),
            meal_plan: Set(Value::from(saved.meal_plan)),
            saved_at: Set(saved.saved_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to save meal plan: {}", e);
            CoreError::InternalServerError
        })?;

        SavedMealPlan::try_from(model)
    }

    async fn delete_by_meal_plan_id(
        &self,
        user_id: Uuid,
        meal_plan_id: String,
    ) -> Result<u64, CoreError> {
        let result = SavedMealPlanEntity::delete_many()
            .filter(SavedMealPlanColumn::UserId.eq(user_id))
            .filter(SavedMealPlanColumn::MealPlanId.eq(meal_plan_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
