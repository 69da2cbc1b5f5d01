pub mod health;
pub mod ready;
