use async_trait::async_trait;

use crate::command::CreateUserCommand;
use crate::model::entity::{User, UserRole};
use crate::model::vo::{UserPatch, UserProfile};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Exact-match lookup on the (login, password) pair. The projection
    /// never includes the password column.
    async fn authenticate(&self, login: &str, password: &str)
        -> anyhow::Result<Option<UserProfile>>;

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<UserProfile>>;

    /// Ordered by full name ascending.
    async fn get_by_role(&self, role: UserRole) -> anyhow::Result<Vec<UserProfile>>;

    /// Ordered by full name ascending.
    async fn get_all(&self) -> anyhow::Result<Vec<UserProfile>>;

    async fn insert(&self, cmd: &CreateUserCommand) -> anyhow::Result<i64>;

    /// Patch semantics: `None` fields stay untouched. Returns whether a
    /// row was changed; an all-`None` patch changes nothing.
    async fn update(&self, id: i64, patch: &UserPatch) -> anyhow::Result<bool>;

    /// Unconditional, no cascade. Dependent requests and comments keep
    /// their now-dangling references.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    /// Insert-or-replace by primary key, for bulk import.
    async fn upsert(&self, user: &User) -> anyhow::Result<()>;
}
