use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::entity::{RequestStatus, UserRole};

/// Public projection of a user record. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub fio: String,
    pub phone: String,
    pub login: String,
    pub role: UserRole,
}

/// Request row joined against users twice at read time. The fio fields
/// are display-only denormalizations and go null when the referenced
/// user no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestView {
    pub request_id: i64,
    pub start_date: NaiveDate,
    pub home_tech_type: String,
    pub home_tech_model: String,
    pub problem_description: String,
    pub request_status: RequestStatus,
    pub completion_date: Option<NaiveDate>,
    pub repair_parts: Option<String>,
    pub master_id: Option<i64>,
    pub client_id: i64,
    pub client_fio: Option<String>,
    pub master_fio: Option<String>,
}

/// Comment joined with its author's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub comment_id: i64,
    pub message: String,
    pub master_id: i64,
    pub request_id: i64,
    pub author_fio: Option<String>,
    pub created_at: NaiveDateTime,
}
