use chrono::NaiveDate;
use domain_ticketing::model::entity::{RequestStatus, UserRole};
use domain_ticketing::model::vo::{RequestFilter, RequestPatch, UserPatch};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginDto {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserDto {
    pub fio: String,
    pub phone: String,
    pub login: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserDto {
    #[serde(flatten)]
    pub patch: UserPatch,
}

#[derive(Debug, Deserialize)]
pub struct CreateRequestDto {
    pub actor_role: UserRole,
    pub home_tech_type: String,
    pub home_tech_model: String,
    pub problem_description: String,
    pub client_id: i64,
    pub master_id: Option<i64>,
}

/// Listing callers identify themselves in the query string; the service
/// narrows the filter from the role, so a client cannot widen its view
/// by supplying someone else's ids.
#[derive(Debug, Deserialize)]
pub struct ListRequestsQuery {
    pub actor_id: i64,
    pub actor_role: UserRole,
    pub request_id: Option<i64>,
    pub client_id: Option<i64>,
    pub master_id: Option<i64>,
    pub status: Option<RequestStatus>,
    pub search: Option<String>,
}

impl ListRequestsQuery {
    pub fn into_filter(self) -> RequestFilter {
        RequestFilter {
            request_id: self.request_id,
            client_id: self.client_id,
            master_id: self.master_id,
            status: self.status,
            search: self.search,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequestDto {
    pub actor_role: UserRole,
    pub request_status: Option<RequestStatus>,
    pub problem_description: Option<String>,
    pub master_id: Option<i64>,
    pub repair_parts: Option<String>,
    pub completion_date: Option<NaiveDate>,
}

impl UpdateRequestDto {
    pub fn into_patch(self) -> RequestPatch {
        RequestPatch {
            request_status: self.request_status,
            problem_description: self.problem_description,
            master_id: self.master_id,
            repair_parts: self.repair_parts,
            completion_date: self.completion_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCommentDto {
    pub message: String,
    pub request_id: i64,
    pub master_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    pub actor_role: UserRole,
}
