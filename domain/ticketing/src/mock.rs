use async_trait::async_trait;
use mockall::mock;

use crate::command::{AddCommentCommand, CreateRequestCommand, CreateUserCommand};
use crate::model::entity::{Comment, Request, User, UserRole};
use crate::model::vo::{
    CommentView, RequestChanges, RequestFilter, RequestView, Statistics, UserPatch, UserProfile,
};
use crate::repository::{CommentRepo, RequestRepo, UserRepo};

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn authenticate(
            &self,
            login: &str,
            password: &str,
        ) -> anyhow::Result<Option<UserProfile>>;
        async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<UserProfile>>;
        async fn get_by_role(&self, role: UserRole) -> anyhow::Result<Vec<UserProfile>>;
        async fn get_all(&self) -> anyhow::Result<Vec<UserProfile>>;
        async fn insert(&self, cmd: &CreateUserCommand) -> anyhow::Result<i64>;
        async fn update(&self, id: i64, patch: &UserPatch) -> anyhow::Result<bool>;
        async fn delete(&self, id: i64) -> anyhow::Result<bool>;
        async fn upsert(&self, user: &User) -> anyhow::Result<()>;
    }
}

mock! {
    pub RequestRepo {}
    #[async_trait]
    impl RequestRepo for RequestRepo {
        async fn insert(&self, cmd: &CreateRequestCommand) -> anyhow::Result<i64>;
        async fn list(&self, filter: &RequestFilter) -> anyhow::Result<Vec<RequestView>>;
        async fn update(&self, id: i64, changes: &RequestChanges) -> anyhow::Result<bool>;
        async fn compute_statistics(&self) -> anyhow::Result<Statistics>;
        async fn upsert(&self, request: &Request) -> anyhow::Result<()>;
    }
}

mock! {
    pub CommentRepo {}
    #[async_trait]
    impl CommentRepo for CommentRepo {
        async fn insert(&self, cmd: &AddCommentCommand) -> anyhow::Result<i64>;
        async fn list_by_request(&self, request_id: i64) -> anyhow::Result<Vec<CommentView>>;
        async fn upsert(&self, comment: &Comment) -> anyhow::Result<()>;
    }
}
