pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use actix_web::web;

/// Shared route wiring for the binary and the endpoint tests. Services are
/// registered separately via `app_data` so tests can inject in-memory
/// repositories.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(presentation::handlers::users::scope())
        .service(presentation::handlers::meals::scope());
}
