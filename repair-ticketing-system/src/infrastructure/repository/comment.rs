use chrono::{NaiveDateTime, Utc};

use async_trait::async_trait;
use domain_ticketing::command::AddCommentCommand;
use domain_ticketing::model::entity::Comment;
use domain_ticketing::model::vo::CommentView;
use domain_ticketing::repository::CommentRepo;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::infrastructure::database::model::{comments, users};
use crate::infrastructure::database::OrmRepo;

#[derive(FromQueryResult)]
struct CommentRow {
    comment_id: i64,
    message: String,
    master_id: i64,
    request_id: i64,
    author_fio: Option<String>,
    created_at: NaiveDateTime,
}

impl From<CommentRow> for CommentView {
    fn from(row: CommentRow) -> Self {
        Self {
            comment_id: row.comment_id,
            message: row.message,
            master_id: row.master_id,
            request_id: row.request_id,
            author_fio: row.author_fio,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CommentRepo for OrmRepo {
    async fn insert(&self, cmd: &AddCommentCommand) -> anyhow::Result<i64> {
        let active_model = comments::ActiveModel {
            message: Set(cmd.message.clone()),
            master_id: Set(cmd.author_id),
            request_id: Set(cmd.request_id),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let result = comments::Entity::insert(active_model)
            .exec(self.db.get_connection())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn list_by_request(&self, request_id: i64) -> anyhow::Result<Vec<CommentView>> {
        let rows = comments::Entity::find()
            .join(JoinType::LeftJoin, comments::Relation::Author.def())
            .column_as(users::Column::Fio, "author_fio")
            .filter(comments::Column::RequestId.eq(request_id))
            // comment_id as a tie-break for same-instant comments
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::CommentId)
            .into_model::<CommentRow>()
            .all(self.db.get_connection())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert(&self, comment: &Comment) -> anyhow::Result<()> {
        let active_model = comments::ActiveModel {
            comment_id: Set(comment.comment_id),
            message: Set(comment.message.clone()),
            master_id: Set(comment.master_id),
            request_id: Set(comment.request_id),
            created_at: Set(comment.created_at),
        };
        comments::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(comments::Column::CommentId)
                    .update_columns([
                        comments::Column::Message,
                        comments::Column::MasterId,
                        comments::Column::RequestId,
                        comments::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }
}
