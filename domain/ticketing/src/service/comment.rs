use async_trait::async_trait;

use crate::command::AddCommentCommand;
use crate::exception::TicketResult;
use crate::model::vo::CommentView;

#[async_trait]
pub trait CommentService: Send + Sync {
    /// Gated on the author's stored role. The request and the author
    /// must both exist.
    async fn add(&self, cmd: AddCommentCommand) -> TicketResult<CommentView>;

    /// Newest first. Reads are not role-gated.
    async fn list(&self, request_id: i64) -> TicketResult<Vec<CommentView>>;
}
