pub mod change_password;
pub mod delete_favorite_recipe;
pub mod delete_meal_plan;
pub mod delete_saved_recipe;
pub mod favorite_recipe;
pub mod get_favorite_recipes;
pub mod get_profile;
pub mod get_saved_meal_plans;
pub mod get_saved_recipes;
pub mod save_meal_plan;
pub mod save_recipe;
pub mod update_profile;
