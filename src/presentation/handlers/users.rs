use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreateUserRequest, UserEnvelope, UsersEnvelope};
use crate::presentation::middleware::request_id;
use actix_web::{HttpRequest, HttpResponse, Scope, get, post, web};
use tracing::info;
use uuid::Uuid;

pub fn scope() -> Scope {
    web::scope("/users")
        .service(list_users)
        .service(create_user)
        .service(get_user)
}

#[get("")]
async fn list_users(users: web::Data<UserService>) -> Result<HttpResponse, DomainError> {
    let users = users.list_users().await?;
    Ok(HttpResponse::Ok().json(UsersEnvelope { users }))
}

#[get("/{id}")]
async fn get_user(
    users: web::Data<UserService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner().to_string();
    let user = users.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(UserEnvelope { user }))
}

#[post("")]
async fn create_user(
    req: HttpRequest,
    users: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let payload = payload.into_inner();
    let user = users.create_user(payload.name, payload.email).await?;

    info!(
        request_id = %request_id(&req),
        user_id = %user.id,
        "user created"
    );

    Ok(HttpResponse::Created().finish())
}
