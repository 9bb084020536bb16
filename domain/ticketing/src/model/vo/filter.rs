use serde::{Deserialize, Serialize};

use crate::model::entity::RequestStatus;

/// Optional, AND-combined request predicates. `search` matches as a
/// case-sensitive substring of the tech type, tech model or problem
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestFilter {
    pub request_id: Option<i64>,
    pub client_id: Option<i64>,
    pub master_id: Option<i64>,
    pub status: Option<RequestStatus>,
    pub search: Option<String>,
}

impl RequestFilter {
    pub fn by_id(request_id: i64) -> Self {
        Self {
            request_id: Some(request_id),
            ..Self::default()
        }
    }
}
