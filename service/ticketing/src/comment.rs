use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use domain_ticketing::{
    command::AddCommentCommand,
    exception::{TicketException, TicketResult},
    model::vo::{CommentView, RequestFilter},
    repository::{CommentRepo, RequestRepo, UserRepo},
    service::CommentService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct CommentServiceImpl {
    comment_repo: Arc<dyn CommentRepo>,
    request_repo: Arc<dyn RequestRepo>,
    user_repo: Arc<dyn UserRepo>,
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn add(&self, cmd: AddCommentCommand) -> TicketResult<CommentView> {
        if self
            .request_repo
            .list(&RequestFilter::by_id(cmd.request_id))
            .await?
            .is_empty()
        {
            return Err(TicketException::NotFound {
                entity: "request",
                id: cmd.request_id,
            });
        }
        let author =
            self.user_repo
                .get_by_id(cmd.author_id)
                .await?
                .ok_or(TicketException::NotFound {
                    entity: "user",
                    id: cmd.author_id,
                })?;
        if !author.role.can_add_comments() {
            return Err(TicketException::Forbidden {
                role: author.role,
                action: "add comments",
            });
        }
        let id = self.comment_repo.insert(&cmd).await?;
        tracing::debug!(comment_id = id, request_id = cmd.request_id, "comment added");
        let view = self
            .comment_repo
            .list_by_request(cmd.request_id)
            .await?
            .into_iter()
            .find(|c| c.comment_id == id)
            .context("created comment missing from listing")?;
        Ok(view)
    }

    async fn list(&self, request_id: i64) -> TicketResult<Vec<CommentView>> {
        Ok(self.comment_repo.list_by_request(request_id).await?)
    }
}
