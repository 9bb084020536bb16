pub mod comments;
pub mod requests;
pub mod users;
