use std::sync::Arc;

use sea_orm::{ConnectOptions, DatabaseConnection};
use typed_builder::TypedBuilder;

/// Owned connection handle shared by every repository.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(url.to_owned());
        options.sqlx_logging(false);
        if url.contains(":memory:") {
            // A private in-memory sqlite database exists per connection;
            // a wider pool would hand out empty databases.
            options.max_connections(1);
        }
        let connection = sea_orm::Database::connect(options).await?;
        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

/// Carrier for the sea-orm implementations of the domain repositories.
/// Every operation executes as its own statement; the store's
/// per-statement atomicity is the only concurrency control.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
}
