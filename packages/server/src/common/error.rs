//! Application error taxonomy shared by every action and route.
//!
//! Every failure surfaced to a client is one of these variants; the HTTP
//! layer maps them onto status codes and a uniform `{"success": false}`
//! JSON envelope. Storage-level errors are sanitized before leaving the
//! process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::auth::AuthError;

/// Convenience alias for action and handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or unacceptable input. Carries the first violated
    /// constraint.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The action needs a logged-in account.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// The requested status change is not an edge of the entity's
    /// lifecycle graph.
    #[error("{0}")]
    InvalidTransition(String),

    /// Storage failed mid-action. The display form never leaks internals.
    #[error("Something went wrong. Please try again.")]
    Persistence(#[from] anyhow::Error),
}

impl ApiError {
    /// Recovers a storage error that an `anyhow::Result` model call wrapped,
    /// so constraint violations keep their user-facing mapping.
    pub fn from_db(err: anyhow::Error) -> Self {
        match err.downcast::<sqlx::Error>() {
            Ok(sqlx_err) => sqlx_err.into(),
            Err(other) => ApiError::Persistence(other),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InvalidTransition(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired => ApiError::AuthenticationRequired,
            AuthError::AdminRequired => {
                ApiError::Forbidden("Admin access required".to_string())
            }
            AuthError::PermissionDenied(msg) => ApiError::Forbidden(msg),
        }
    }
}

/// Classifies storage errors. `RowNotFound` becomes a 404; unique-constraint
/// violations on known indexes become validation errors with a message a
/// user can act on; everything else is an opaque persistence failure.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return ApiError::NotFound("Resource not found.".to_string());
        }

        if let sqlx::Error::Database(db_err) = &err {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                match db_err.constraint() {
                    Some("users_email_key") => {
                        return ApiError::Validation(
                            "Email is already registered.".to_string(),
                        );
                    }
                    Some("idx_mentorship_requests_open_pair") => {
                        return ApiError::Validation(
                            "You already have a pending request to this mentor.".to_string(),
                        );
                    }
                    _ => {}
                }
            }
        }

        ApiError::Persistence(err.into())
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::Validation(format!("Invalid upload: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Persistence(source) = &self {
            tracing::error!(error = ?source, "Persistence error");
        }

        let body = json!({
            "success": false,
            "error": self.to_string(),
        });

        (self.status_code(), axum::Json(body)).into_response()
    }
}
