pub mod config;
pub mod database;
pub mod repository;
mod service_provider;

#[rustfmt::skip]
pub use {
    config::{build_config, AppConfig},
    service_provider::ServiceProvider,
};
