use actix_web::HttpResponse;
use thiserror::Error;

use crate::shared::api::ApiResponse;

/// Failure taxonomy shared by the catalog, payments and user-management
/// use cases. Each variant has exactly one HTTP mapping, so handlers can
/// forward errors without re-inventing status codes per endpoint.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Conflict(String),

    /// Upstream collaborator (payment gateway, mail transport) failed.
    /// Never retried synchronously; the caller decides whether to re-issue.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Repository(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn to_response(&self) -> HttpResponse {
        match self {
            CoreError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", msg),
            CoreError::NotFound(what) => {
                ApiResponse::not_found("NOT_FOUND", &format!("{what} not found"))
            }
            CoreError::PermissionDenied(msg) => ApiResponse::forbidden("PERMISSION_DENIED", msg),
            CoreError::Conflict(msg) => ApiResponse::conflict("CONFLICT", msg),
            CoreError::Upstream(msg) => {
                tracing::warn!("upstream failure: {msg}");
                ApiResponse::bad_gateway("UPSTREAM_ERROR", "Payment provider is unavailable")
            }
            CoreError::Repository(msg) => {
                tracing::error!("repository error: {msg}");
                ApiResponse::internal_error()
            }
        }
    }
}
