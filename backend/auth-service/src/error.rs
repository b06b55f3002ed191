/// Error types for the auth service
///
/// Every handler returns `Result<_, AuthError>`; actix renders the error
/// through [`ResponseError`], so all failures leave the service in the same
/// JSON shape.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Context tag reported for errors that are not tied to a handler
pub const SERVICE_NAME: &str = "Auth Service";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{message}")]
    BadRequest { message: String, coming_from: String },

    #[error("{message}")]
    NotFound { message: String, coming_from: String },

    #[error("{message}")]
    Unauthorized { message: String, coming_from: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to publish message: {0}")]
    Publish(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;

impl AuthError {
    pub fn bad_request(message: impl Into<String>, coming_from: impl Into<String>) -> Self {
        AuthError::BadRequest {
            message: message.into(),
            coming_from: coming_from.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, coming_from: impl Into<String>) -> Self {
        AuthError::NotFound {
            message: message.into(),
            coming_from: coming_from.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>, coming_from: impl Into<String>) -> Self {
        AuthError::Unauthorized {
            message: message.into(),
            coming_from: coming_from.into(),
        }
    }

    fn coming_from(&self) -> &str {
        match self {
            AuthError::BadRequest { coming_from, .. }
            | AuthError::NotFound { coming_from, .. }
            | AuthError::Unauthorized { coming_from, .. } => coming_from,
            _ => SERVICE_NAME,
        }
    }

    fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::Database(_)
                | AuthError::Publish(_)
                | AuthError::Token(_)
                | AuthError::Internal(_)
        )
    }
}

/// Error body shared by all marketplace services
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
    pub status: String,
    pub coming_from: String,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AuthError::NotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let message = if self.is_internal() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(
                status = status.as_u16(),
                coming_from = self.coming_from(),
                "{}",
                self
            );
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            message,
            status_code: status.as_u16(),
            status: "error".to_string(),
            coming_from: self.coming_from().to_string(),
        })
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Database(err.to_string())
    }
}

impl From<crypto_core::SignerError> for AuthError {
    fn from(err: crypto_core::SignerError) -> Self {
        AuthError::Token(err.to_string())
    }
}
