use tracing::{info, instrument};

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    generation::{entities::MealPlan, ports::LLMClient},
    health::ports::HealthCheckRepository,
    jwt::ports::JwtCodec,
    meal_plan_book::{
        entities::SavedMealPlan,
        ports::{MealPlanBookService, SavedMealPlanRepository},
    },
    recipe_book::ports::SavedRecipeRepository,
    user::ports::UserRepository,
};

impl<U, SR, MP, H, J, HC, LLM> MealPlanBookService for Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity, meal_plan, title), fields(user_id = %identity.id()))]
    async fn save_meal_plan(
        &self,
        identity: Identity,
        meal_plan: MealPlan,
        title: Option<String>,
    ) -> Result<SavedMealPlan, CoreError> {
        let saved = self
            .saved_meal_plan_repository
            .create(SavedMealPlan::new(identity.id(), meal_plan, title))
            .await?;

        info!(meal_plan_id = %saved.meal_plan_id, "Meal plan saved");
        Ok(saved)
    }

    async fn list_meal_plans(&self, identity: Identity) -> Result<Vec<SavedMealPlan>, CoreError> {
        self.saved_meal_plan_repository.list(identity.id()).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn delete_meal_plan(
        &self,
        identity: Identity,
        meal_plan_id: String,
    ) -> Result<(), CoreError> {
        let removed = self
            .saved_meal_plan_repository
            .delete_by_meal_plan_id(identity.id(), meal_plan_id)
            .await?;

        info!(removed, "Meal plan deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::domain::{common::services::mocks::Mocks, user::entities::User};

    fn identity() -> Identity {
        Identity::new(User::new("Ada".into(), "ada@example.com".into(), "h".into()))
    }

    #[tokio::test]
    async fn test_save_meal_plan_uses_default_title() {
        let identity = identity();
        let owner = identity.id();

        let mut mocks = Mocks::new();
        mocks
            .saved_meal_plan_repository
            .expect_create()
            .withf(move |s| s.user_id == owner && s.title == "Meal Plan - 2 Days")
            .times(1)
            .returning(|s| Box::pin(async move { Ok(s) }));

        let plan =
            MealPlan::try_from(json!({"summary": {"totalDays": 2}, "mealPlan": []})).unwrap();

        let saved = mocks
            .into_service()
            .save_meal_plan(identity, plan, None)
            .await
            .unwrap();

        assert!(!saved.meal_plan_id.is_empty());
    }

    #[tokio::test]
    async fn test_delete_meal_plan_is_scoped_to_owner() {
        let identity = identity();
        let owner = identity.id();

        let mut mocks = Mocks::new();
        mocks
            .saved_meal_plan_repository
            .expect_delete_by_meal_plan_id()
            .with(eq(owner), eq("1700000000000_abcdefghi".to_string()))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(1) }));

        mocks
            .into_service()
            .delete_meal_plan(identity, "1700000000000_abcdefghi".to_string())
            .await
            .unwrap();
    }
}
