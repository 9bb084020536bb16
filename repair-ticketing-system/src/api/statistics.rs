use actix_web::{get, web, HttpResponse};

use super::dtos::StatisticsQuery;
use super::ApiError;
use crate::infrastructure::ServiceProvider;

#[get("/statistics/")]
pub async fn get_statistics(
    sp: web::Data<ServiceProvider>,
    query: web::Query<StatisticsQuery>,
) -> Result<HttpResponse, ApiError> {
    let stats = sp.request_service.statistics(query.actor_role).await?;
    Ok(HttpResponse::Ok().json(stats))
}
