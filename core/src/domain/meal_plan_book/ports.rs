use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    generation::entities::MealPlan, meal_plan_book::entities::SavedMealPlan,
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanBookService: Send + Sync {
    fn save_meal_plan(
        &self,
        identity: Identity,
        meal_plan: MealPlan,
        title: Option<String>,
    ) -> impl Future<Output = Result<SavedMealPlan, CoreError>> + Send;

    fn list_meal_plans(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<SavedMealPlan>, CoreError>> + Send;

    fn delete_meal_plan(
        &self,
        identity: Identity,
        meal_plan_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SavedMealPlanRepository: Send + Sync {
    /// Oldest first.
    fn list(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SavedMealPlan>, CoreError>> + Send;

    fn create(
        &self,
        saved: SavedMealPlan,
    ) -> impl Future<Output = Result<SavedMealPlan, CoreError>> + Send;

    fn delete_by_meal_plan_id(
        &self,
        user_id: Uuid,
        meal_plan_id: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
