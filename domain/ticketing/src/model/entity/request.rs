use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticket status. Any status may move to any other; `New` is the only
/// initial state and `Ready` is not terminal. The sole coupled behavior
/// is `completion_date`, owned by the request service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    New,
    InProgress,
    WaitingParts,
    Ready,
}

impl RequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::InProgress => "InProgress",
            RequestStatus::WaitingParts => "WaitingParts",
            RequestStatus::Ready => "Ready",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "New" => RequestStatus::New,
            "InProgress" => RequestStatus::InProgress,
            "WaitingParts" => RequestStatus::WaitingParts,
            "Ready" => RequestStatus::Ready,
            other => return Err(UnknownStatus(other.to_string())),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown request status: {0}")]
pub struct UnknownStatus(pub String);

/// One repair ticket as stored. `client_id`/`master_id` are weak
/// references into the users table; a deleted user may leave them
/// dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
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
}
