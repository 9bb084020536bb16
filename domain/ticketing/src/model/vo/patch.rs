use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::entity::{RequestStatus, UserRole};

/// One cell of a change set. `Keep` leaves the stored value untouched;
/// `Set` overwrites it, including `Set(None)` for nullable columns.
/// This is what lets the request service clear `completion_date` where
/// plain omit-to-keep patch semantics could not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> Patch<T> {
    pub const fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    pub fn set(self) -> Option<T> {
        match self {
            Patch::Keep => None,
            Patch::Set(value) => Some(value),
        }
    }
}

/// Partial user update. `None` means leave unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub fio: Option<String>,
    pub phone: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.fio.is_none()
            && self.phone.is_none()
            && self.login.is_none()
            && self.password.is_none()
            && self.role.is_none()
    }
}

/// Partial request update as accepted from callers. `completion_date`
/// here can only be supplied, not cleared; clearing is a service-side
/// status side effect expressed through [`RequestChanges`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestPatch {
    pub request_status: Option<RequestStatus>,
    pub problem_description: Option<String>,
    pub master_id: Option<i64>,
    pub repair_parts: Option<String>,
    pub completion_date: Option<NaiveDate>,
}

/// Enumerated change set handed to the request repository. Each field is
/// a named column; there is deliberately no free-form field map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestChanges {
    pub request_status: Option<RequestStatus>,
    pub problem_description: Option<String>,
    pub master_id: Option<i64>,
    pub repair_parts: Option<String>,
    pub completion_date: Patch<Option<NaiveDate>>,
}

impl RequestChanges {
    pub fn is_empty(&self) -> bool {
        self.request_status.is_none()
            && self.problem_description.is_none()
            && self.master_id.is_none()
            && self.repair_parts.is_none()
            && self.completion_date.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_changes_touch_nothing() {
        let changes = RequestChanges::default();
        assert!(changes.is_empty());
        assert!(changes.completion_date.is_keep());
    }

    #[test]
    fn set_null_is_not_keep() {
        let cleared: Patch<Option<NaiveDate>> = Patch::Set(None);
        assert!(!cleared.is_keep());
        assert_eq!(cleared.set(), Some(None));
    }
}
