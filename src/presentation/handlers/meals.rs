use crate::application::meal_service::MealService;
use crate::domain::error::DomainError;
use crate::domain::meal::MealChanges;
use crate::presentation::dto::{MealEnvelope, MealPayload, MealsEnvelope, MetricsEnvelope};
use crate::presentation::identity::{CallerIdentity, RequiredIdentity, ensure_owner};
use crate::presentation::middleware::request_id;
use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};
use tracing::info;
use uuid::Uuid;

pub fn scope() -> Scope {
    // "/metrics" before "/{id}" so the literal segment wins.
    web::scope("/meals")
        .service(list_meals)
        .service(metrics)
        .service(create_meal)
        .service(get_meal)
        .service(update_meal)
        .service(delete_meal)
}

#[get("")]
async fn list_meals(
    identity: CallerIdentity,
    meals: web::Data<MealService>,
) -> Result<HttpResponse, DomainError> {
    let meals = meals.list_meals(identity.0.as_deref()).await?;
    Ok(HttpResponse::Ok().json(MealsEnvelope { meals }))
}

#[get("/metrics")]
async fn metrics(
    identity: RequiredIdentity,
    meals: web::Data<MealService>,
) -> Result<HttpResponse, DomainError> {
    let metrics = meals.metrics(&identity.0).await?;
    Ok(HttpResponse::Ok().json(MetricsEnvelope { metrics }))
}

#[get("/{id}")]
async fn get_meal(
    identity: RequiredIdentity,
    meals: web::Data<MealService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner().to_string();
    let meal = ensure_owner(meals.get_meal(&id).await?, &identity.0)?;
    Ok(HttpResponse::Ok().json(MealEnvelope { meal }))
}

#[put("/{id}")]
async fn update_meal(
    req: HttpRequest,
    identity: RequiredIdentity,
    meals: web::Data<MealService>,
    payload: web::Json<MealPayload>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner().to_string();
    ensure_owner(meals.get_meal(&id).await?, &identity.0)?;

    let payload = payload.into_inner();
    meals
        .update_meal(
            &id,
            MealChanges {
                name: payload.name,
                description: payload.description,
                datetime: payload.datetime,
                inside_diet: payload.inside_diet,
                user_id: identity.0,
            },
        )
        .await?;

    info!(
        request_id = %request_id(&req),
        meal_id = %id,
        "meal updated"
    );

    Ok(HttpResponse::Ok().finish())
}

#[delete("/{id}")]
async fn delete_meal(
    req: HttpRequest,
    identity: RequiredIdentity,
    meals: web::Data<MealService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner().to_string();
    ensure_owner(meals.get_meal(&id).await?, &identity.0)?;

    meals.delete_meal(&id).await?;

    info!(
        request_id = %request_id(&req),
        meal_id = %id,
        "meal deleted"
    );

    Ok(HttpResponse::NoContent().finish())
}

#[post("")]
async fn create_meal(
    req: HttpRequest,
    identity: RequiredIdentity,
    meals: web::Data<MealService>,
    payload: web::Json<MealPayload>,
) -> Result<HttpResponse, DomainError> {
    let payload = payload.into_inner();
    let meal = meals
        .create_meal(
            identity.0,
            payload.name,
            payload.description,
            payload.datetime,
            payload.inside_diet,
        )
        .await?;

    info!(
        request_id = %request_id(&req),
        meal_id = %meal.id,
        user_id = %meal.user_id,
        "meal created"
    );

    Ok(HttpResponse::Created().finish())
}
