use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role held by a user account. Stored as its wire string in the
/// historical `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Manager,
    Master,
    Operator,
    Client,
    QualityManager,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Manager => "Manager",
            UserRole::Master => "Master",
            UserRole::Operator => "Operator",
            UserRole::Client => "Client",
            UserRole::QualityManager => "QualityManager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Manager" => UserRole::Manager,
            "Master" => UserRole::Master,
            "Operator" => UserRole::Operator,
            "Client" => UserRole::Client,
            "QualityManager" => UserRole::QualityManager,
            other => return Err(UnknownRole(other.to_string())),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown user role: {0}")]
pub struct UnknownRole(pub String);

/// Full user record as stored, password included. Read paths hand out
/// [`UserProfile`](crate::model::vo::UserProfile) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub fio: String,
    pub phone: String,
    pub login: String,
    pub password: String,
    pub role: UserRole,
}
