mod comment;
mod request;
mod user;

#[rustfmt::skip]
pub use {
    comment::CommentServiceImpl,
    request::RequestServiceImpl,
    user::UserServiceImpl,
};
