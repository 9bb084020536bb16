pub mod migrate;
pub mod model;
mod orm;

pub use orm::{Database, OrmRepo};
