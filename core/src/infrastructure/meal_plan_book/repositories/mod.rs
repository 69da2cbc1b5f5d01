pub mod saved_meal_plan_repository;
