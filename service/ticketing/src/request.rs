use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_ticketing::{
    command::CreateRequestCommand,
    exception::{TicketException, TicketResult},
    model::{
        entity::{RequestStatus, UserRole},
        vo::{Actor, Patch, RequestChanges, RequestFilter, RequestPatch, RequestView, Statistics},
    },
    repository::{RequestRepo, UserRepo},
    service::RequestService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct RequestServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    user_repo: Arc<dyn UserRepo>,
}

impl RequestServiceImpl {
    async fn ensure_master(&self, id: i64) -> TicketResult<()> {
        match self.user_repo.get_by_id(id).await? {
            Some(user) if user.role.is_master() => Ok(()),
            _ => Err(TicketException::InvalidReference { id }),
        }
    }

    async fn view(&self, id: i64) -> TicketResult<RequestView> {
        self.request_repo
            .list(&RequestFilter::by_id(id))
            .await?
            .into_iter()
            .next()
            .ok_or(TicketException::NotFound {
                entity: "request",
                id,
            })
    }
}

#[async_trait]
impl RequestService for RequestServiceImpl {
    async fn create(
        &self,
        cmd: CreateRequestCommand,
        actor_role: UserRole,
    ) -> TicketResult<RequestView> {
        if !actor_role.can_create_request() {
            return Err(TicketException::Forbidden {
                role: actor_role,
                action: "create requests",
            });
        }
        if self.user_repo.get_by_id(cmd.client_id).await?.is_none() {
            return Err(TicketException::NotFound {
                entity: "user",
                id: cmd.client_id,
            });
        }
        if let Some(master_id) = cmd.master_id {
            self.ensure_master(master_id).await?;
        }
        let id = self.request_repo.insert(&cmd).await?;
        tracing::debug!(request_id = id, client_id = cmd.client_id, "request created");
        self.view(id).await
    }

    async fn list(&self, mut filter: RequestFilter, actor: Actor) -> TicketResult<Vec<RequestView>> {
        // Server-side scoping: caller-supplied filters are never trusted
        // to widen what a client or master may see.
        if actor.role.is_client() {
            filter.client_id = Some(actor.id);
        } else if actor.role.is_master() {
            filter.master_id = Some(actor.id);
        } else if !actor.role.can_view_all_requests() {
            // Unreachable with the current role set; guards any role
            // added without a listing rule.
            return Ok(Vec::new());
        }
        Ok(self.request_repo.list(&filter).await?)
    }

    async fn get(&self, id: i64) -> TicketResult<RequestView> {
        self.view(id).await
    }

    async fn update(
        &self,
        id: i64,
        patch: RequestPatch,
        actor_role: UserRole,
    ) -> TicketResult<RequestView> {
        if !actor_role.can_edit_request() {
            return Err(TicketException::Forbidden {
                role: actor_role,
                action: "edit requests",
            });
        }
        self.view(id).await?;
        if let Some(master_id) = patch.master_id {
            self.ensure_master(master_id).await?;
        }

        // Moving to Ready stamps a completion date (today when the caller
        // supplied none); moving anywhere else explicitly nulls it out,
        // the one place omit-to-keep patch semantics is overridden.
        let completion_date = match patch.request_status {
            Some(RequestStatus::Ready) => Patch::Set(Some(
                patch.completion_date.unwrap_or_else(|| Utc::now().date_naive()),
            )),
            Some(_) => Patch::Set(None),
            None => match patch.completion_date {
                Some(date) => Patch::Set(Some(date)),
                None => Patch::Keep,
            },
        };
        let changes = RequestChanges {
            request_status: patch.request_status,
            problem_description: patch.problem_description,
            master_id: patch.master_id,
            repair_parts: patch.repair_parts,
            completion_date,
        };
        if !self.request_repo.update(id, &changes).await? {
            return Err(TicketException::UpdateFailed);
        }
        if let Some(status) = changes.request_status {
            tracing::debug!(request_id = id, status = %status, "request status changed");
        }
        self.view(id).await
    }

    async fn statistics(&self, actor_role: UserRole) -> TicketResult<Statistics> {
        if !actor_role.can_view_statistics() {
            return Err(TicketException::Forbidden {
                role: actor_role,
                action: "view statistics",
            });
        }
        Ok(self.request_repo.compute_statistics().await?)
    }
}
