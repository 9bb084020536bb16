use chrono::{NaiveDate, Utc};

use async_trait::async_trait;
use domain_ticketing::command::CreateRequestCommand;
use domain_ticketing::model::entity::{Request, RequestStatus};
use domain_ticketing::model::vo::{RequestChanges, RequestFilter, RequestView, Statistics};
use domain_ticketing::repository::RequestRepo;
use sea_orm::sea_query::{Alias, Expr, OnConflict};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::infrastructure::database::model::{requests, users};
use crate::infrastructure::database::OrmRepo;

/// Request row with the two denormalized user names from the double
/// left join.
#[derive(FromQueryResult)]
struct RequestRow {
    request_id: i64,
    start_date: NaiveDate,
    home_tech_type: String,
    home_tech_model: String,
    problem_description: String,
    request_status: String,
    completion_date: Option<NaiveDate>,
    repair_parts: Option<String>,
    master_id: Option<i64>,
    client_id: i64,
    client_fio: Option<String>,
    master_fio: Option<String>,
}

impl RequestRow {
    fn into_view(self) -> anyhow::Result<RequestView> {
        Ok(RequestView {
            request_id: self.request_id,
            start_date: self.start_date,
            home_tech_type: self.home_tech_type,
            home_tech_model: self.home_tech_model,
            problem_description: self.problem_description,
            request_status: self.request_status.parse()?,
            completion_date: self.completion_date,
            repair_parts: self.repair_parts,
            master_id: self.master_id,
            client_id: self.client_id,
            client_fio: self.client_fio,
            master_fio: self.master_fio,
        })
    }
}

fn filter_condition(filter: &RequestFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(id) = filter.request_id {
        condition = condition.add(requests::Column::RequestId.eq(id));
    }
    if let Some(client_id) = filter.client_id {
        condition = condition.add(requests::Column::ClientId.eq(client_id));
    }
    if let Some(master_id) = filter.master_id {
        condition = condition.add(requests::Column::MasterId.eq(master_id));
    }
    if let Some(status) = filter.status {
        condition = condition.add(requests::Column::RequestStatus.eq(status.as_str()));
    }
    if let Some(term) = &filter.search {
        // instr rather than LIKE: sqlite LIKE is ASCII case-insensitive
        // and the search token must match case-sensitively.
        condition = condition.add(
            Condition::any()
                .add(Expr::cust_with_values(
                    "instr(home_tech_type, ?) > 0",
                    [term.clone()],
                ))
                .add(Expr::cust_with_values(
                    "instr(home_tech_model, ?) > 0",
                    [term.clone()],
                ))
                .add(Expr::cust_with_values(
                    "instr(problem_description, ?) > 0",
                    [term.clone()],
                )),
        );
    }
    condition
}

#[async_trait]
impl RequestRepo for OrmRepo {
    async fn insert(&self, cmd: &CreateRequestCommand) -> anyhow::Result<i64> {
        let active_model = requests::ActiveModel {
            start_date: Set(Utc::now().date_naive()),
            home_tech_type: Set(cmd.home_tech_type.clone()),
            home_tech_model: Set(cmd.home_tech_model.clone()),
            problem_description: Set(cmd.problem_description.clone()),
            request_status: Set(RequestStatus::New.as_str().to_owned()),
            completion_date: Set(None),
            repair_parts: Set(None),
            master_id: Set(cmd.master_id),
            client_id: Set(cmd.client_id),
            ..Default::default()
        };
        let result = requests::Entity::insert(active_model)
            .exec(self.db.get_connection())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn list(&self, filter: &RequestFilter) -> anyhow::Result<Vec<RequestView>> {
        let client = Alias::new("client");
        let master = Alias::new("master");
        let rows = requests::Entity::find()
            .join_as(
                JoinType::LeftJoin,
                requests::Relation::Client.def(),
                client.clone(),
            )
            .join_as(
                JoinType::LeftJoin,
                requests::Relation::Master.def(),
                master.clone(),
            )
            .column_as(Expr::col((client, users::Column::Fio)), "client_fio")
            .column_as(Expr::col((master, users::Column::Fio)), "master_fio")
            .filter(filter_condition(filter))
            .order_by_desc(requests::Column::StartDate)
            .into_model::<RequestRow>()
            .all(self.db.get_connection())
            .await?;
        rows.into_iter().map(RequestRow::into_view).collect()
    }

    async fn update(&self, id: i64, changes: &RequestChanges) -> anyhow::Result<bool> {
        if changes.is_empty() {
            return Ok(false);
        }
        let mut active_model = requests::ActiveModel::default();
        if let Some(status) = changes.request_status {
            active_model.request_status = Set(status.as_str().to_owned());
        }
        if let Some(description) = &changes.problem_description {
            active_model.problem_description = Set(description.clone());
        }
        if let Some(master_id) = changes.master_id {
            active_model.master_id = Set(Some(master_id));
        }
        if let Some(parts) = &changes.repair_parts {
            active_model.repair_parts = Set(Some(parts.clone()));
        }
        if let Some(completion_date) = changes.completion_date.set() {
            // Set(None) writes an explicit NULL here, which is how
            // reopening a Ready request drops its completion date.
            active_model.completion_date = Set(completion_date);
        }
        let result = requests::Entity::update_many()
            .set(active_model)
            .filter(requests::Column::RequestId.eq(id))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn compute_statistics(&self) -> anyhow::Result<Statistics> {
        let conn = self.db.get_connection();

        let total_requests = requests::Entity::find().count(conn).await? as i64;
        let completed_requests = requests::Entity::find()
            .filter(requests::Column::RequestStatus.eq(RequestStatus::Ready.as_str()))
            .count(conn)
            .await? as i64;

        let spans: Vec<(NaiveDate, NaiveDate)> = requests::Entity::find()
            .select_only()
            .column(requests::Column::StartDate)
            .column(requests::Column::CompletionDate)
            .filter(requests::Column::CompletionDate.is_not_null())
            .into_tuple()
            .all(conn)
            .await?;
        let average_repair_time_days = if spans.is_empty() {
            None
        } else {
            let total_days: i64 = spans
                .iter()
                .map(|(start, completion)| (*completion - *start).num_days())
                .sum();
            let mean = total_days as f64 / spans.len() as f64;
            Some((mean * 100.0).round() / 100.0)
        };

        let by_status: Vec<(String, i64)> = requests::Entity::find()
            .select_only()
            .column(requests::Column::RequestStatus)
            .column_as(requests::Column::RequestId.count(), "count")
            .group_by(requests::Column::RequestStatus)
            .into_tuple()
            .all(conn)
            .await?;
        let by_tech_type: Vec<(String, i64)> = requests::Entity::find()
            .select_only()
            .column(requests::Column::HomeTechType)
            .column_as(requests::Column::RequestId.count(), "count")
            .group_by(requests::Column::HomeTechType)
            .into_tuple()
            .all(conn)
            .await?;

        Ok(Statistics {
            total_requests,
            completed_requests,
            average_repair_time_days,
            requests_by_status: by_status.into_iter().collect(),
            requests_by_tech_type: by_tech_type.into_iter().collect(),
        })
    }

    async fn upsert(&self, request: &Request) -> anyhow::Result<()> {
        let active_model = requests::ActiveModel {
            request_id: Set(request.request_id),
            start_date: Set(request.start_date),
            home_tech_type: Set(request.home_tech_type.clone()),
            home_tech_model: Set(request.home_tech_model.clone()),
            problem_description: Set(request.problem_description.clone()),
            request_status: Set(request.request_status.as_str().to_owned()),
            completion_date: Set(request.completion_date),
            repair_parts: Set(request.repair_parts.clone()),
            master_id: Set(request.master_id),
            client_id: Set(request.client_id),
        };
        requests::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(requests::Column::RequestId)
                    .update_columns([
                        requests::Column::StartDate,
                        requests::Column::HomeTechType,
                        requests::Column::HomeTechModel,
                        requests::Column::ProblemDescription,
                        requests::Column::RequestStatus,
                        requests::Column::CompletionDate,
                        requests::Column::RepairParts,
                        requests::Column::MasterId,
                        requests::Column::ClientId,
                    ])
                    .to_owned(),
            )
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }
}
