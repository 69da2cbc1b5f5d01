pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod meal_plan_book;
pub mod recipe_book;
pub mod user;
