use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};

use crate::auth::{self, AuthError, Claims};
use crate::error::ApiError;
use crate::AppState;

/// Verified caller identity, extracted from the `Authorization` header by
/// the token gate. Handlers that take this as an argument are gated: a
/// missing header rejects with 401 and a bad token with 403 before the
/// handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub claims: Claims,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let header_str = header_value.to_str().map_err(|_| AuthError::InvalidToken)?;
        let token = extract_bearer(header_str)?;

        let claims = auth::verify(token, &state.config.access_token_secret)?;

        Ok(AuthUser { email: claims.email.clone(), claims })
    }
}

/// A present-but-malformed header counts as invalid credentials, not absent
/// ones, so it rejects as Forbidden rather than Unauthorized.
fn extract_bearer(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(AuthError::InvalidToken)?;

    if token.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Ok(token)
}
