pub use super::saved_meal_plans::Entity as SavedMealPlans;
pub use super::saved_recipes::Entity as SavedRecipes;
pub use super::users::Entity as Users;
