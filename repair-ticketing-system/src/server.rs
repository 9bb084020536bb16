use std::sync::Arc;

use actix_web::web;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::infrastructure::{build_config, AppConfig, ServiceProvider};

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("Cannot build config: {e}");
        }
    };

    let service_provider = match ServiceProvider::build(&config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("Cannot build service provider: {e}");
        }
    };

    tokio::select! {
        _ = initialize_web_host(service_provider, &config) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>, config: &AppConfig) {
    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::from(sp.clone()))
            .service(api::user::login)
            .service(api::user::create_user)
            .service(api::user::list_users)
            // role route before the {user_id} route; actix matches in
            // registration order.
            .service(api::user::list_users_by_role)
            .service(api::user::get_user)
            .service(api::user::update_user)
            .service(api::user::delete_user)
            .service(api::request::create_request)
            .service(api::request::list_requests)
            .service(api::request::get_request)
            .service(api::request::update_request)
            .service(api::comment::add_comment)
            .service(api::comment::list_comments)
            .service(api::statistics::get_statistics)
    })
    .bind((config.host.bind_address.as_str(), config.host.bind_port))
    .unwrap()
    .disable_signals()
    .run()
    .await
    {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server error: {}", e),
    }
}
