pub mod dto;
pub mod handlers;
pub mod identity;
pub mod middleware;
