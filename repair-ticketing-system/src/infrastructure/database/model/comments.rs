//! Append-only request notes.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub comment_id: i64,
    pub message: String,
    /// Authoring user; historical column name, any commenting role
    /// appears here.
    pub master_id: i64,
    pub request_id: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::MasterId",
        to = "super::users::Column::UserId"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::RequestId"
    )]
    Request,
}

impl ActiveModelBehavior for ActiveModel {}
