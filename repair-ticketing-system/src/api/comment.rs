use actix_web::{get, post, web, HttpResponse};
use domain_ticketing::command::AddCommentCommand;

use super::dtos::AddCommentDto;
use super::ApiError;
use crate::infrastructure::ServiceProvider;

#[post("/comments/")]
pub async fn add_comment(
    sp: web::Data<ServiceProvider>,
    data: web::Json<AddCommentDto>,
) -> Result<HttpResponse, ApiError> {
    let data = data.into_inner();
    let view = sp
        .comment_service
        .add(AddCommentCommand {
            message: data.message,
            request_id: data.request_id,
            author_id: data.master_id,
        })
        .await?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/comments/{request_id}")]
pub async fn list_comments(
    sp: web::Data<ServiceProvider>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let views = sp.comment_service.list(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(views))
}
