use sea_orm::sea_query::{ColumnDef, Index, Table};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use super::model::{comments, requests, users};

/// Idempotently creates the three tables and the secondary indexes on
/// the request and comment lookup columns.
///
/// The user references are deliberately not declared as foreign keys;
/// deleting a user leaves dangling ids that the read joins tolerate.
pub async fn create_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();

    let users_table = Table::create()
        .table(users::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(users::Column::UserId)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(users::Column::Fio).string().not_null())
        .col(ColumnDef::new(users::Column::Phone).string().not_null())
        .col(
            ColumnDef::new(users::Column::Login)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(users::Column::Password).string().not_null())
        .col(ColumnDef::new(users::Column::Role).string().not_null())
        .to_owned();

    let requests_table = Table::create()
        .table(requests::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(requests::Column::RequestId)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(requests::Column::StartDate).date().not_null())
        .col(ColumnDef::new(requests::Column::HomeTechType).string().not_null())
        .col(ColumnDef::new(requests::Column::HomeTechModel).string().not_null())
        .col(ColumnDef::new(requests::Column::ProblemDescription).string().not_null())
        .col(ColumnDef::new(requests::Column::RequestStatus).string().not_null())
        .col(ColumnDef::new(requests::Column::CompletionDate).date())
        .col(ColumnDef::new(requests::Column::RepairParts).string())
        .col(ColumnDef::new(requests::Column::MasterId).big_integer())
        .col(ColumnDef::new(requests::Column::ClientId).big_integer().not_null())
        .to_owned();

    let comments_table = Table::create()
        .table(comments::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(comments::Column::CommentId)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(comments::Column::Message).string().not_null())
        .col(ColumnDef::new(comments::Column::MasterId).big_integer().not_null())
        .col(ColumnDef::new(comments::Column::RequestId).big_integer().not_null())
        .col(ColumnDef::new(comments::Column::CreatedAt).date_time().not_null())
        .to_owned();

    for table in [users_table, requests_table, comments_table] {
        db.execute(backend.build(&table)).await?;
    }

    let indexes = [
        Index::create()
            .name("idx_requests_status")
            .table(requests::Entity)
            .col(requests::Column::RequestStatus)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_requests_client")
            .table(requests::Entity)
            .col(requests::Column::ClientId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_requests_master")
            .table(requests::Entity)
            .col(requests::Column::MasterId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_comments_request")
            .table(comments::Entity)
            .col(comments::Column::RequestId)
            .if_not_exists()
            .to_owned(),
    ];
    for index in indexes {
        db.execute(backend.build(&index)).await?;
    }
    Ok(())
}
