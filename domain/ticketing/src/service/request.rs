use async_trait::async_trait;

use crate::command::CreateRequestCommand;
use crate::exception::TicketResult;
use crate::model::entity::UserRole;
use crate::model::vo::{Actor, RequestFilter, RequestPatch, RequestView, Statistics};

#[async_trait]
pub trait RequestService: Send + Sync {
    async fn create(&self, cmd: CreateRequestCommand, actor_role: UserRole)
        -> TicketResult<RequestView>;

    /// The actor's role shapes the effective filter: a client only ever
    /// sees their own requests and a master only their assignments,
    /// whatever filter they supplied.
    async fn list(&self, filter: RequestFilter, actor: Actor) -> TicketResult<Vec<RequestView>>;

    async fn get(&self, id: i64) -> TicketResult<RequestView>;

    async fn update(&self, id: i64, patch: RequestPatch, actor_role: UserRole)
        -> TicketResult<RequestView>;

    async fn statistics(&self, actor_role: UserRole) -> TicketResult<Statistics>;
}
