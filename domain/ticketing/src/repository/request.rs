use async_trait::async_trait;

use crate::command::CreateRequestCommand;
use crate::model::entity::Request;
use crate::model::vo::{RequestChanges, RequestFilter, RequestView, Statistics};

#[async_trait]
pub trait RequestRepo: Send + Sync {
    /// Inserts with server-assigned id, `start_date` = today and
    /// status `New`.
    async fn insert(&self, cmd: &CreateRequestCommand) -> anyhow::Result<i64>;

    /// Left-joined against users twice to denormalize the client and
    /// master names. Ordered by `start_date` descending; sub-day order
    /// is the store's natural order and not part of the contract.
    async fn list(&self, filter: &RequestFilter) -> anyhow::Result<Vec<RequestView>>;

    /// Applies an enumerated change set. Returns whether a row was
    /// changed; an empty change set changes nothing.
    async fn update(&self, id: i64, changes: &RequestChanges) -> anyhow::Result<bool>;

    async fn compute_statistics(&self) -> anyhow::Result<Statistics>;

    /// Insert-or-replace by primary key, for bulk import.
    async fn upsert(&self, request: &Request) -> anyhow::Result<()>;
}
