//! User accounts.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    pub fio: String,
    pub phone: String,
    #[sea_orm(unique)]
    pub login: String,
    pub password: String,
    /// Role string; the column keeps its historical name.
    #[sea_orm(column_name = "type")]
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
