use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregates over the whole requests table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_requests: i64,
    pub completed_requests: i64,
    /// Mean of `completion_date - start_date` in days over rows with a
    /// completion date, rounded to 2 decimals. `None` when no row has one.
    pub average_repair_time_days: Option<f64>,
    pub requests_by_status: HashMap<String, i64>,
    pub requests_by_tech_type: HashMap<String, i64>,
}
