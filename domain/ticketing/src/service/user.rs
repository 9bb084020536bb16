use async_trait::async_trait;

use crate::command::CreateUserCommand;
use crate::exception::TicketResult;
use crate::model::entity::UserRole;
use crate::model::vo::{UserPatch, UserProfile};

#[async_trait]
pub trait UserService: Send + Sync {
    async fn login(&self, login: &str, password: &str) -> TicketResult<UserProfile>;

    async fn create(&self, cmd: CreateUserCommand) -> TicketResult<UserProfile>;

    async fn get(&self, id: i64) -> TicketResult<UserProfile>;

    async fn list_by_role(&self, role: UserRole) -> TicketResult<Vec<UserProfile>>;

    async fn list_all(&self) -> TicketResult<Vec<UserProfile>>;

    async fn update(&self, id: i64, patch: UserPatch) -> TicketResult<UserProfile>;

    async fn remove(&self, id: i64) -> TicketResult<()>;
}
