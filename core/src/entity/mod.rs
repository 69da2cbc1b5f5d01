pub mod prelude;

pub mod saved_meal_plans;
pub mod saved_recipes;
pub mod users;
