pub mod error;
pub mod meal;
pub mod user;
