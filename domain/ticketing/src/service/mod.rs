mod comment;
mod request;
mod user;

#[rustfmt::skip]
pub use {
    comment::CommentService,
    request::RequestService,
    user::UserService,
};
