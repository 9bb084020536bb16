use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Append-only note on a request. `master_id` is the authoring user; the
/// field name is historical and any commenting role may appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub message: String,
    pub master_id: i64,
    pub request_id: i64,
    pub created_at: NaiveDateTime,
}
