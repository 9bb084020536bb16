use async_trait::async_trait;

use crate::command::AddCommentCommand;
use crate::model::entity::Comment;
use crate::model::vo::CommentView;

#[async_trait]
pub trait CommentRepo: Send + Sync {
    /// Inserts with server-assigned id and `created_at` = now (UTC).
    async fn insert(&self, cmd: &AddCommentCommand) -> anyhow::Result<i64>;

    /// Left-joined against users for the author name, newest first.
    async fn list_by_request(&self, request_id: i64) -> anyhow::Result<Vec<CommentView>>;

    /// Insert-or-replace by primary key, for bulk import.
    async fn upsert(&self, comment: &Comment) -> anyhow::Result<()>;
}
