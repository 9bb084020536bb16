use crate::model::entity::UserRole;

pub type TicketResult<T> = Result<T, TicketException>;

/// Error taxonomy surfaced by the services. Store-level constraint
/// violations arrive as `Validation` with the underlying message kept
/// for diagnostics; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum TicketException {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("role {role} is not allowed to {action}")]
    Forbidden { role: UserRole, action: &'static str },

    #[error("user {id} does not exist or is not a master")]
    InvalidReference { id: i64 },

    #[error("invalid login or password")]
    Unauthorized,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("update touched no rows")]
    UpdateFailed,

    #[error("internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for TicketException {
    fn from(e: anyhow::Error) -> Self {
        TicketException::Internal { source: e }
    }
}
