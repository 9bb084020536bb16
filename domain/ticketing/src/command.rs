use serde::{Deserialize, Serialize};

use crate::model::entity::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserCommand {
    pub fio: String,
    pub phone: String,
    pub login: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequestCommand {
    pub home_tech_type: String,
    pub home_tech_model: String,
    pub problem_description: String,
    pub client_id: i64,
    pub master_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCommentCommand {
    pub message: String,
    pub request_id: i64,
    /// Authoring user. The service resolves the stored role itself; the
    /// caller's claim about it is never trusted.
    pub author_id: i64,
}
