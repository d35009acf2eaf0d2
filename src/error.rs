// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized (no credentials presented)
    Unauthorized(String),

    // 403 Forbidden (credentials present but invalid or insufficient)
    Forbidden(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::InternalServerError(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => ApiError::unauthorized("unauthorized access"),
            AuthError::InvalidToken | AuthError::NotOwner | AuthError::NotAdmin => {
                ApiError::forbidden("Forbidden access")
            }
            AuthError::TokenGeneration(msg) => {
                tracing::error!("token generation failed: {msg}");
                ApiError::internal_server_error("Failed to issue token")
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // Log the real error but return a generic message
        tracing::error!("database error: {err}");
        ApiError::internal_server_error("An error occurred while processing your request")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_the_two_tiers() {
        let missing: ApiError = AuthError::MissingToken.into();
        assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(missing.message(), "unauthorized access");

        let invalid: ApiError = AuthError::InvalidToken.into();
        assert_eq!(invalid.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(invalid.message(), "Forbidden access");

        let not_owner: ApiError = AuthError::NotOwner.into();
        assert_eq!(not_owner.status_code(), StatusCode::FORBIDDEN);

        let not_admin: ApiError = AuthError::NotAdmin.into();
        assert_eq!(not_admin.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn error_body_carries_a_message_field() {
        let err = ApiError::forbidden("Forbidden access");
        assert_eq!(err.to_json(), json!({ "message": "Forbidden access" }));
    }

    #[test]
    fn store_failures_become_generic_500s() {
        let err: ApiError = sqlx::Error::PoolClosed.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("Pool"));
    }
}
