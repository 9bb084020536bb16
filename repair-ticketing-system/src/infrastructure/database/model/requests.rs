//! Repair tickets.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub request_id: i64,
    pub start_date: Date,
    pub home_tech_type: String,
    pub home_tech_model: String,
    pub problem_description: String,
    pub request_status: String,
    pub completion_date: Option<Date>,
    pub repair_parts: Option<String>,
    /// Weak reference; not a database-enforced foreign key, a deleted
    /// user may leave it dangling.
    pub master_id: Option<i64>,
    pub client_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ClientId",
        to = "super::users::Column::UserId"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::MasterId",
        to = "super::users::Column::UserId"
    )]
    Master,
}

impl ActiveModelBehavior for ActiveModel {}
