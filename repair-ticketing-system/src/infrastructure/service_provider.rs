use std::sync::Arc;

use domain_ticketing::repository::{CommentRepo, RequestRepo, UserRepo};
use domain_ticketing::service::{CommentService, RequestService, UserService};
use service_ticketing::{CommentServiceImpl, RequestServiceImpl, UserServiceImpl};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::{migrate, Database, OrmRepo};

/// Wires the store, repositories and services together. One instance is
/// shared by every actix worker.
pub struct ServiceProvider {
    pub user_service: Arc<dyn UserService>,
    pub request_service: Arc<dyn RequestService>,
    pub comment_service: Arc<dyn CommentService>,
}

impl ServiceProvider {
    pub async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::new(&config.db.url).await?);
        migrate::create_schema(database.get_connection()).await?;

        let orm_repo = Arc::new(OrmRepo::builder().db(database).build());
        let user_repo: Arc<dyn UserRepo> = orm_repo.clone();
        let request_repo: Arc<dyn RequestRepo> = orm_repo.clone();
        let comment_repo: Arc<dyn CommentRepo> = orm_repo;

        let user_service = Arc::new(
            UserServiceImpl::builder()
                .user_repo(user_repo.clone())
                .build(),
        );
        let request_service = Arc::new(
            RequestServiceImpl::builder()
                .request_repo(request_repo.clone())
                .user_repo(user_repo.clone())
                .build(),
        );
        let comment_service = Arc::new(
            CommentServiceImpl::builder()
                .comment_repo(comment_repo)
                .request_repo(request_repo)
                .user_repo(user_repo)
                .build(),
        );

        Ok(Self {
            user_service,
            request_service,
            comment_service,
        })
    }
}
