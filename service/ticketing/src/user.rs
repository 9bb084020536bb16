use std::sync::Arc;

use async_trait::async_trait;
use domain_ticketing::{
    command::CreateUserCommand,
    exception::{TicketException, TicketResult},
    model::{
        entity::UserRole,
        vo::{UserPatch, UserProfile},
    },
    repository::UserRepo,
    service::UserService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepo>,
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn login(&self, login: &str, password: &str) -> TicketResult<UserProfile> {
        self.user_repo
            .authenticate(login, password)
            .await?
            .ok_or(TicketException::Unauthorized)
    }

    async fn create(&self, cmd: CreateUserCommand) -> TicketResult<UserProfile> {
        // A violated login uniqueness constraint surfaces here; keep the
        // store's message for diagnostics.
        let id = self
            .user_repo
            .insert(&cmd)
            .await
            .map_err(|e| TicketException::Validation(e.to_string()))?;
        tracing::debug!(user_id = id, role = %cmd.role, "user created");
        self.user_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::NotFound { entity: "user", id })
    }

    async fn get(&self, id: i64) -> TicketResult<UserProfile> {
        self.user_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::NotFound { entity: "user", id })
    }

    async fn list_by_role(&self, role: UserRole) -> TicketResult<Vec<UserProfile>> {
        Ok(self.user_repo.get_by_role(role).await?)
    }

    async fn list_all(&self) -> TicketResult<Vec<UserProfile>> {
        Ok(self.user_repo.get_all().await?)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> TicketResult<UserProfile> {
        if self.user_repo.get_by_id(id).await?.is_none() {
            return Err(TicketException::NotFound { entity: "user", id });
        }
        let changed = self
            .user_repo
            .update(id, &patch)
            .await
            .map_err(|e| TicketException::Validation(e.to_string()))?;
        if !changed {
            return Err(TicketException::UpdateFailed);
        }
        self.user_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::NotFound { entity: "user", id })
    }

    async fn remove(&self, id: i64) -> TicketResult<()> {
        // Unconditional: dependent requests and comments are left with
        // dangling references, which the read joins tolerate.
        if !self.user_repo.delete(id).await? {
            return Err(TicketException::NotFound { entity: "user", id });
        }
        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}
