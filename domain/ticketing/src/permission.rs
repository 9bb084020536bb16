//! Role capabilities. Pure predicates over [`UserRole`], consulted by the
//! services before any mutation; nothing reaches the repositories around
//! them. These are role-level capabilities, not instance ACLs.

use crate::model::entity::UserRole;

impl UserRole {
    pub const fn can_create_request(self) -> bool {
        matches!(
            self,
            UserRole::Client | UserRole::Manager | UserRole::Operator
        )
    }

    pub const fn can_edit_request(self) -> bool {
        matches!(
            self,
            UserRole::Manager | UserRole::Operator | UserRole::QualityManager | UserRole::Master
        )
    }

    pub const fn can_manage_users(self) -> bool {
        matches!(self, UserRole::Manager)
    }

    pub const fn can_view_all_requests(self) -> bool {
        matches!(
            self,
            UserRole::Manager | UserRole::Operator | UserRole::QualityManager | UserRole::Master
        )
    }

    pub const fn can_add_comments(self) -> bool {
        matches!(
            self,
            UserRole::Master | UserRole::Manager | UserRole::Operator | UserRole::QualityManager
        )
    }

    pub const fn can_view_statistics(self) -> bool {
        matches!(
            self,
            UserRole::Manager | UserRole::Operator | UserRole::QualityManager
        )
    }

    pub const fn is_client(self) -> bool {
        matches!(self, UserRole::Client)
    }

    pub const fn is_master(self) -> bool {
        matches!(self, UserRole::Master)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [UserRole; 5] = [
        UserRole::Manager,
        UserRole::Master,
        UserRole::Operator,
        UserRole::Client,
        UserRole::QualityManager,
    ];

    #[test]
    fn client_creates_but_never_edits() {
        assert!(UserRole::Client.can_create_request());
        assert!(!UserRole::Client.can_edit_request());
        assert!(!UserRole::Client.can_add_comments());
        assert!(!UserRole::Client.can_view_all_requests());
    }

    #[test]
    fn master_edits_and_comments_but_sees_no_statistics() {
        assert!(UserRole::Master.can_edit_request());
        assert!(UserRole::Master.can_add_comments());
        assert!(!UserRole::Master.can_view_statistics());
        assert!(!UserRole::Master.can_create_request());
    }

    #[test]
    fn only_manager_manages_users() {
        for role in ALL {
            assert_eq!(role.can_manage_users(), matches!(role, UserRole::Manager));
        }
    }

    #[test]
    fn role_strings_round_trip() {
        for role in ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("Janitor".parse::<UserRole>().is_err());
    }
}
