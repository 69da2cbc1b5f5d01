pub mod authentication;
pub mod common;
pub mod crypto;
pub mod generation;
pub mod health;
pub mod jwt;
pub mod meal_plan_book;
pub mod recipe_book;
pub mod user;
