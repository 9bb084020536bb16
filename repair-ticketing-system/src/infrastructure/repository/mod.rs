mod comment;
mod request;
mod user;
