pub mod comment;
pub mod dtos;
mod error;
pub mod request;
pub mod statistics;
pub mod user;

pub use error::ApiError;
