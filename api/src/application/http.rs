pub mod authentication;
pub mod health;
pub mod meal_planner;
pub mod recipes;
pub mod server;
pub mod user;
