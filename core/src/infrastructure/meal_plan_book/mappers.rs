use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, generation::entities::MealPlan,
    meal_plan_book::entities::SavedMealPlan,
};
use crate::entity::saved_meal_plans::Model as SavedMealPlanModel;

impl TryFrom<SavedMealPlanModel> for SavedMealPlan {
    type Error = CoreError;

    fn try_from(model: SavedMealPlanModel) -> Result<Self, Self::Error> {
        let meal_plan = MealPlan::try_from(model.meal_plan).map_err(|e| {
            error!("Corrupt saved meal plan row {}: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(SavedMealPlan {
            id: model.id,
            meal_plan_id: model.meal_plan_id,
            user_id: model.user_id,
            title: model.title,
            meal_plan,
            saved_at: Utc.from_utc_datetime(&model.saved_at),
        })
    }
}
