//! End-to-end service tests over a private in-memory sqlite store.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use domain_ticketing::command::{AddCommentCommand, CreateRequestCommand, CreateUserCommand};
use domain_ticketing::exception::TicketException;
use domain_ticketing::model::entity::{Request, RequestStatus, UserRole};
use domain_ticketing::model::vo::{Actor, RequestFilter, RequestPatch, UserProfile};
use domain_ticketing::repository::RequestRepo;
use domain_ticketing::service::{CommentService, RequestService, UserService};
use repair_ticketing_system::infrastructure::database::{migrate, Database, OrmRepo};
use service_ticketing::{CommentServiceImpl, RequestServiceImpl, UserServiceImpl};

struct TestApp {
    repo: Arc<OrmRepo>,
    users: UserServiceImpl,
    requests: RequestServiceImpl,
    comments: CommentServiceImpl,
}

impl TestApp {
    async fn new() -> Self {
        let database = Arc::new(Database::new("sqlite::memory:").await.unwrap());
        migrate::create_schema(database.get_connection()).await.unwrap();
        let repo = Arc::new(OrmRepo::builder().db(database).build());
        Self {
            repo: repo.clone(),
            users: UserServiceImpl::builder().user_repo(repo.clone()).build(),
            requests: RequestServiceImpl::builder()
                .request_repo(repo.clone())
                .user_repo(repo.clone())
                .build(),
            comments: CommentServiceImpl::builder()
                .comment_repo(repo.clone())
                .request_repo(repo.clone())
                .user_repo(repo)
                .build(),
        }
    }

    async fn add_user(&self, fio: &str, login: &str, role: UserRole) -> UserProfile {
        self.users
            .create(CreateUserCommand {
                fio: fio.to_owned(),
                phone: "+7-900-000-00-00".to_owned(),
                login: login.to_owned(),
                password: "secret".to_owned(),
                role,
            })
            .await
            .unwrap()
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request_cmd(client_id: i64) -> CreateRequestCommand {
    CreateRequestCommand {
        home_tech_type: "Washing machine".to_owned(),
        home_tech_model: "Samsung WW90".to_owned(),
        problem_description: "Does not spin".to_owned(),
        client_id,
        master_id: None,
    }
}

#[tokio::test]
async fn created_user_round_trips_without_password() {
    let app = TestApp::new().await;
    let created = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    let fetched = app.users.get(created.user_id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.role, UserRole::Client);

    let json = serde_json::to_value(&fetched).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["fio"], "Ivanov Ivan");

    let authenticated = app.users.login("ivanov", "secret").await.unwrap();
    assert_eq!(authenticated.user_id, created.user_id);
    let denied = app.users.login("ivanov", "wrong").await.unwrap_err();
    assert!(matches!(denied, TicketException::Unauthorized));
}

#[tokio::test]
async fn duplicate_login_is_rejected_as_validation() {
    let app = TestApp::new().await;
    app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    let err = app
        .users
        .create(CreateUserCommand {
            fio: "Petrov Petr".to_owned(),
            phone: "+7-900-000-00-01".to_owned(),
            login: "ivanov".to_owned(),
            password: "other".to_owned(),
            role: UserRole::Master,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TicketException::Validation(_)));
}

#[tokio::test]
async fn fresh_request_gets_server_side_defaults() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    let view = app
        .requests
        .create(request_cmd(client.user_id), UserRole::Client)
        .await
        .unwrap();
    assert_eq!(view.request_status, RequestStatus::New);
    assert_eq!(view.start_date, Utc::now().date_naive());
    assert_eq!(view.completion_date, None);
    assert_eq!(view.repair_parts, None);
    assert_eq!(view.client_fio.as_deref(), Some("Ivanov Ivan"));
    assert_eq!(view.master_fio, None);
}

#[tokio::test]
async fn full_repair_lifecycle() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    let master = app.add_user("Petrov Petr", "petrov", UserRole::Master).await;

    let view = app
        .requests
        .create(request_cmd(client.user_id), UserRole::Client)
        .await
        .unwrap();

    // Manager assigns the master and starts the work.
    let view = app
        .requests
        .update(
            view.request_id,
            RequestPatch {
                request_status: Some(RequestStatus::InProgress),
                master_id: Some(master.user_id),
                repair_parts: Some("Drive belt".to_owned()),
                ..RequestPatch::default()
            },
            UserRole::Manager,
        )
        .await
        .unwrap();
    assert_eq!(view.request_status, RequestStatus::InProgress);
    assert_eq!(view.master_fio.as_deref(), Some("Petrov Petr"));
    assert_eq!(view.completion_date, None);

    // Master closes it; completion date defaults to today.
    let view = app
        .requests
        .update(
            view.request_id,
            RequestPatch {
                request_status: Some(RequestStatus::Ready),
                ..RequestPatch::default()
            },
            UserRole::Master,
        )
        .await
        .unwrap();
    assert_eq!(view.request_status, RequestStatus::Ready);
    assert_eq!(view.completion_date, Some(Utc::now().date_naive()));

    // Reopening clears the completion date again.
    let view = app
        .requests
        .update(
            view.request_id,
            RequestPatch {
                request_status: Some(RequestStatus::WaitingParts),
                ..RequestPatch::default()
            },
            UserRole::Operator,
        )
        .await
        .unwrap();
    assert_eq!(view.completion_date, None);

    // The master comments; the client may not.
    let comment = app
        .comments
        .add(AddCommentCommand {
            message: "Belt replaced, waiting for bearings".to_owned(),
            request_id: view.request_id,
            author_id: master.user_id,
        })
        .await
        .unwrap();
    assert_eq!(comment.author_fio.as_deref(), Some("Petrov Petr"));

    let err = app
        .comments
        .add(AddCommentCommand {
            message: "Hurry up please".to_owned(),
            request_id: view.request_id,
            author_id: client.user_id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TicketException::Forbidden { .. }));

    let listed = app.comments.list(view.request_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].message, "Belt replaced, waiting for bearings");
}

#[tokio::test]
async fn assigning_a_non_master_changes_nothing() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    let view = app
        .requests
        .create(request_cmd(client.user_id), UserRole::Client)
        .await
        .unwrap();

    let err = app
        .requests
        .update(
            view.request_id,
            RequestPatch {
                request_status: Some(RequestStatus::InProgress),
                master_id: Some(client.user_id),
                ..RequestPatch::default()
            },
            UserRole::Manager,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TicketException::InvalidReference { .. }));

    let unchanged = app.requests.get(view.request_id).await.unwrap();
    assert_eq!(unchanged.request_status, RequestStatus::New);
    assert_eq!(unchanged.master_id, None);
}

#[tokio::test]
async fn clients_and_masters_see_only_their_requests() {
    let app = TestApp::new().await;
    let alice = app.add_user("Ivanova Anna", "ivanova", UserRole::Client).await;
    let bob = app.add_user("Sidorov Boris", "sidorov", UserRole::Client).await;
    let master = app.add_user("Petrov Petr", "petrov", UserRole::Master).await;

    let own = app
        .requests
        .create(request_cmd(alice.user_id), UserRole::Client)
        .await
        .unwrap();
    let other = app
        .requests
        .create(request_cmd(bob.user_id), UserRole::Client)
        .await
        .unwrap();
    app.requests
        .update(
            other.request_id,
            RequestPatch {
                master_id: Some(master.user_id),
                ..RequestPatch::default()
            },
            UserRole::Manager,
        )
        .await
        .unwrap();

    // Even asking for someone else's requests, a client gets their own.
    let seen = app
        .requests
        .list(
            RequestFilter {
                client_id: Some(bob.user_id),
                ..RequestFilter::default()
            },
            Actor {
                id: alice.user_id,
                role: UserRole::Client,
            },
        )
        .await
        .unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].request_id, own.request_id);

    let assigned = app
        .requests
        .list(
            RequestFilter::default(),
            Actor {
                id: master.user_id,
                role: UserRole::Master,
            },
        )
        .await
        .unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].request_id, other.request_id);

    let all = app
        .requests
        .list(
            RequestFilter::default(),
            Actor {
                id: 0,
                role: UserRole::Manager,
            },
        )
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn search_matches_case_sensitively() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    app.requests
        .create(request_cmd(client.user_id), UserRole::Client)
        .await
        .unwrap();

    let list = |term: &str| {
        let filter = RequestFilter {
            search: Some(term.to_owned()),
            ..RequestFilter::default()
        };
        let actor = Actor {
            id: 0,
            role: UserRole::Operator,
        };
        app.requests.list(filter, actor)
    };

    assert_eq!(list("Samsung").await.unwrap().len(), 1);
    assert_eq!(list("samsung").await.unwrap().len(), 0);
    assert_eq!(list("spin").await.unwrap().len(), 1);
    assert_eq!(list("toaster").await.unwrap().len(), 0);
}

fn seed_request(id: i64, client_id: i64, tech: &str, status: RequestStatus,
                start: NaiveDate, completion: Option<NaiveDate>) -> Request {
    Request {
        request_id: id,
        start_date: start,
        home_tech_type: tech.to_owned(),
        home_tech_model: "Generic".to_owned(),
        problem_description: "Broken".to_owned(),
        request_status: status,
        completion_date: completion,
        repair_parts: None,
        master_id: None,
        client_id,
    }
}

#[tokio::test]
async fn statistics_aggregate_the_seeded_requests() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;

    let start = day(2026, 3, 1);
    let seeds = [
        seed_request(1, client.user_id, "Fridge", RequestStatus::Ready, start, Some(day(2026, 3, 4))),
        seed_request(2, client.user_id, "Fridge", RequestStatus::Ready, start, Some(day(2026, 3, 5))),
        seed_request(3, client.user_id, "Kettle", RequestStatus::New, start, None),
    ];
    for seed in &seeds {
        RequestRepo::upsert(app.repo.as_ref(), seed).await.unwrap();
    }

    let stats = app.requests.statistics(UserRole::Manager).await.unwrap();
    assert_eq!(stats.total_requests, 3);
    assert_eq!(stats.completed_requests, 2);
    assert_eq!(stats.average_repair_time_days, Some(3.5));
    assert_eq!(stats.requests_by_status.get("Ready"), Some(&2));
    assert_eq!(stats.requests_by_status.get("New"), Some(&1));
    assert_eq!(stats.requests_by_tech_type.get("Fridge"), Some(&2));
    assert_eq!(stats.requests_by_tech_type.get("Kettle"), Some(&1));

    let err = app.requests.statistics(UserRole::Client).await.unwrap_err();
    assert!(matches!(err, TicketException::Forbidden { .. }));
}

#[tokio::test]
async fn statistics_on_an_empty_store_have_no_average() {
    let app = TestApp::new().await;
    let stats = app.requests.statistics(UserRole::QualityManager).await.unwrap();
    assert_eq!(stats.total_requests, 0);
    assert_eq!(stats.completed_requests, 0);
    assert_eq!(stats.average_repair_time_days, None);
    assert!(stats.requests_by_status.is_empty());
}

#[tokio::test]
async fn upsert_replaces_an_existing_request_by_id() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;

    let seed = seed_request(7, client.user_id, "Fridge", RequestStatus::New, day(2026, 1, 1), None);
    RequestRepo::upsert(app.repo.as_ref(), &seed).await.unwrap();
    let replaced = seed_request(7, client.user_id, "Fridge", RequestStatus::Ready,
                                day(2026, 1, 1), Some(day(2026, 1, 6)));
    RequestRepo::upsert(app.repo.as_ref(), &replaced).await.unwrap();

    let view = app.requests.get(7).await.unwrap();
    assert_eq!(view.request_status, RequestStatus::Ready);
    assert_eq!(view.completion_date, Some(day(2026, 1, 6)));

    let all = app
        .requests
        .list(RequestFilter::default(), Actor { id: 0, role: UserRole::Manager })
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn deleting_a_user_leaves_names_dangling() {
    let app = TestApp::new().await;
    let client = app.add_user("Ivanov Ivan", "ivanov", UserRole::Client).await;
    let master = app.add_user("Petrov Petr", "petrov", UserRole::Master).await;

    let view = app
        .requests
        .create(request_cmd(client.user_id), UserRole::Client)
        .await
        .unwrap();
    app.requests
        .update(
            view.request_id,
            RequestPatch {
                master_id: Some(master.user_id),
                ..RequestPatch::default()
            },
            UserRole::Manager,
        )
        .await
        .unwrap();
    app.comments
        .add(AddCommentCommand {
            message: "Looking at it".to_owned(),
            request_id: view.request_id,
            author_id: master.user_id,
        })
        .await
        .unwrap();

    app.users.remove(master.user_id).await.unwrap();

    let view = app.requests.get(view.request_id).await.unwrap();
    assert_eq!(view.master_id, Some(master.user_id));
    assert_eq!(view.master_fio, None);

    let comments = app.comments.list(view.request_id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author_fio, None);
}

#[tokio::test]
async fn users_are_listed_ordered_by_name() {
    let app = TestApp::new().await;
    app.add_user("Sidorov Boris", "sidorov", UserRole::Master).await;
    app.add_user("Ivanova Anna", "ivanova", UserRole::Master).await;
    app.add_user("Petrov Petr", "petrov", UserRole::Client).await;

    let masters = app.users.list_by_role(UserRole::Master).await.unwrap();
    let names: Vec<_> = masters.iter().map(|u| u.fio.as_str()).collect();
    assert_eq!(names, ["Ivanova Anna", "Sidorov Boris"]);

    let everyone = app.users.list_all().await.unwrap();
    assert_eq!(everyone.len(), 3);
    assert!(everyone.windows(2).all(|w| w[0].fio <= w[1].fio));
}
