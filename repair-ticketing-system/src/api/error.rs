use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use domain_ticketing::exception::TicketException;
use serde_json::json;

/// Thin wrapper mapping the service error taxonomy onto HTTP. Bodies
/// follow the `{"detail": ...}` shape throughout.
#[derive(Debug)]
pub struct ApiError(pub TicketException);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<TicketException> for ApiError {
    fn from(e: TicketException) -> Self {
        Self(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            TicketException::NotFound { .. } => StatusCode::NOT_FOUND,
            TicketException::Forbidden { .. } => StatusCode::FORBIDDEN,
            TicketException::Unauthorized => StatusCode::UNAUTHORIZED,
            TicketException::InvalidReference { .. }
            | TicketException::Validation(_)
            | TicketException::UpdateFailed => StatusCode::BAD_REQUEST,
            TicketException::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let TicketException::Internal { source } = &self.0 {
            tracing::error!(%source, "internal error");
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
