use actix_web::{get, post, put, web, HttpResponse};
use domain_ticketing::command::CreateRequestCommand;
use domain_ticketing::model::vo::Actor;

use super::dtos::{CreateRequestDto, ListRequestsQuery, UpdateRequestDto};
use super::ApiError;
use crate::infrastructure::ServiceProvider;

#[post("/requests/")]
pub async fn create_request(
    sp: web::Data<ServiceProvider>,
    data: web::Json<CreateRequestDto>,
) -> Result<HttpResponse, ApiError> {
    let data = data.into_inner();
    let view = sp
        .request_service
        .create(
            CreateRequestCommand {
                home_tech_type: data.home_tech_type,
                home_tech_model: data.home_tech_model,
                problem_description: data.problem_description,
                client_id: data.client_id,
                master_id: data.master_id,
            },
            data.actor_role,
        )
        .await?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/requests/")]
pub async fn list_requests(
    sp: web::Data<ServiceProvider>,
    query: web::Query<ListRequestsQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let actor = Actor {
        id: query.actor_id,
        role: query.actor_role,
    };
    let views = sp
        .request_service
        .list(query.into_filter(), actor)
        .await?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/requests/{request_id}")]
pub async fn get_request(
    sp: web::Data<ServiceProvider>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let view = sp.request_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/requests/{request_id}")]
pub async fn update_request(
    sp: web::Data<ServiceProvider>,
    path: web::Path<i64>,
    data: web::Json<UpdateRequestDto>,
) -> Result<HttpResponse, ApiError> {
    let data = data.into_inner();
    let actor_role = data.actor_role;
    let view = sp
        .request_service
        .update(path.into_inner(), data.into_patch(), actor_role)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}
