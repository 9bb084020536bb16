mod comment;
mod request;
mod user;

#[rustfmt::skip]
pub use {
    comment::CommentRepo,
    request::RequestRepo,
    user::UserRepo,
};
