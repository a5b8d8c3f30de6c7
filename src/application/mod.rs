pub mod meal_service;
pub mod user_service;
