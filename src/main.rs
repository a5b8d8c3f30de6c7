use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use diet_server::application::meal_service::MealService;
use diet_server::application::user_service::UserService;
use diet_server::configure_routes;
use diet_server::data::meal_repository::PostgresMealRepository;
use diet_server::data::user_repository::PostgresUserRepository;
use diet_server::infrastructure::config::AppConfig;
use diet_server::infrastructure::database::{create_pool, run_migrations};
use diet_server::infrastructure::logging::init_logging;
use diet_server::presentation::middleware::RequestTrace;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");
    let pool = create_pool(&config.database_url)
        .await
        .expect("failed to connect to database");
    run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    let user_service = UserService::new(Arc::new(PostgresUserRepository::new(pool.clone())));
    let meal_service = MealService::new(Arc::new(PostgresMealRepository::new(pool.clone())));

    let config_data = config.clone();

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(RequestTrace)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(cors)
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(meal_service.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn build_cors(config: &AppConfig) -> Cors {
    // allow_any_header so the `user_id` identity header passes preflight
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600);

    for origin in &config.cors_origins {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
