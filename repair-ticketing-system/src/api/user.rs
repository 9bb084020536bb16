use actix_web::{delete, get, post, put, web, HttpResponse};
use domain_ticketing::command::CreateUserCommand;
use domain_ticketing::exception::TicketException;
use domain_ticketing::model::entity::UserRole;
use serde_json::json;

use super::dtos::{CreateUserDto, LoginDto, UpdateUserDto};
use super::ApiError;
use crate::infrastructure::ServiceProvider;

#[post("/auth/login")]
pub async fn login(
    sp: web::Data<ServiceProvider>,
    data: web::Json<LoginDto>,
) -> Result<HttpResponse, ApiError> {
    let profile = sp.user_service.login(&data.login, &data.password).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[post("/users/")]
pub async fn create_user(
    sp: web::Data<ServiceProvider>,
    data: web::Json<CreateUserDto>,
) -> Result<HttpResponse, ApiError> {
    let data = data.into_inner();
    let profile = sp
        .user_service
        .create(CreateUserCommand {
            fio: data.fio,
            phone: data.phone,
            login: data.login,
            password: data.password,
            role: data.role,
        })
        .await?;
    Ok(HttpResponse::Created().json(profile))
}

#[get("/users/")]
pub async fn list_users(sp: web::Data<ServiceProvider>) -> Result<HttpResponse, ApiError> {
    let users = sp.user_service.list_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

// Registered before `/users/{user_id}` so "role" is not read as an id.
#[get("/users/role/{role}")]
pub async fn list_users_by_role(
    sp: web::Data<ServiceProvider>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let role: UserRole = path
        .parse()
        .map_err(|e: domain_ticketing::model::entity::UnknownRole| {
            TicketException::Validation(e.to_string())
        })?;
    let users = sp.user_service.list_by_role(role).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/{user_id}")]
pub async fn get_user(
    sp: web::Data<ServiceProvider>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let profile = sp.user_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[put("/users/{user_id}")]
pub async fn update_user(
    sp: web::Data<ServiceProvider>,
    path: web::Path<i64>,
    data: web::Json<UpdateUserDto>,
) -> Result<HttpResponse, ApiError> {
    let profile = sp
        .user_service
        .update(path.into_inner(), data.into_inner().patch)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/users/{user_id}")]
pub async fn delete_user(
    sp: web::Data<ServiceProvider>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    sp.user_service.remove(id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": format!("user {id} deleted") })))
}
