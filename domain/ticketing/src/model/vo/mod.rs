mod filter;
mod patch;
mod stats;
mod view;

use serde::{Deserialize, Serialize};

use crate::model::entity::UserRole;

#[rustfmt::skip]
pub use {
    filter::RequestFilter,
    patch::{Patch, RequestChanges, RequestPatch, UserPatch},
    stats::Statistics,
    view::{CommentView, RequestView, UserProfile},
};

/// The user performing an operation. Always threaded explicitly into the
/// services; there is no ambient current-user state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub role: UserRole,
}
