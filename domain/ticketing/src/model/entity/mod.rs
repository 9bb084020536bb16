mod comment;
mod request;
mod user;

#[rustfmt::skip]
pub use {
    comment::Comment,
    request::{Request, RequestStatus, UnknownStatus},
    user::{UnknownRole, User, UserRole},
};
