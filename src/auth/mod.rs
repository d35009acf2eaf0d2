use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::database::models::profile::Profile;

/// Tokens expire one day after issue; reissuing via /login is the only way
/// to extend a session.
const TOKEN_TTL_HOURS: i64 = 24;

/// Payload signed into a bearer token. The email identifies the caller;
/// any other fields the client submitted at login ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(email: String, extra: Map<String, Value>) -> Self {
        let now = Utc::now();
        Self {
            email,
            extra,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("bearer token missing")]
    MissingToken,

    #[error("token invalid or expired")]
    InvalidToken,

    #[error("caller does not own the requested resource")]
    NotOwner,

    #[error("caller is not an admin")]
    NotAdmin,

    #[error("token generation failed: {0}")]
    TokenGeneration(String),
}

pub fn sign(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Validates signature and expiration. Any failure collapses into
/// `InvalidToken`; the caller only distinguishes missing vs. invalid.
pub fn verify(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

/// A caller may only read resources owned by the email baked into their token.
pub fn authorize_owner(decoded_email: &str, requested_email: &str) -> Result<(), AuthError> {
    if decoded_email == requested_email {
        Ok(())
    } else {
        Err(AuthError::NotOwner)
    }
}

/// Admin is a role on the caller's profile. No profile means no role.
pub fn authorize_admin(profile: Option<&Profile>) -> Result<(), AuthError> {
    match profile {
        Some(p) if p.role.as_deref() == Some("admin") => Ok(()),
        _ => Err(AuthError::NotAdmin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    const SECRET: &str = "test-secret";

    fn claims_with_extra() -> Claims {
        let mut extra = Map::new();
        extra.insert("name".to_string(), json!("Ada"));
        extra.insert("cart".to_string(), json!([1, 2, 3]));
        Claims::new("a@b.com".to_string(), extra)
    }

    #[test]
    fn sign_then_verify_returns_equal_claims() {
        let claims = claims_with_extra();
        let token = sign(&claims, SECRET).unwrap();
        let decoded = verify(&token, SECRET).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn expiry_is_one_day_out() {
        let claims = Claims::new("a@b.com".to_string(), Map::new());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn expired_token_is_invalid() {
        let mut claims = claims_with_extra();
        // Well past the default validation leeway
        claims.iat -= 48 * 3600;
        claims.exp -= 48 * 3600;
        let token = sign(&claims, SECRET).unwrap();
        assert!(matches!(verify(&token, SECRET), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token = sign(&claims_with_extra(), SECRET).unwrap();
        assert!(matches!(verify(&token, "other-secret"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert!(matches!(verify("not.a.jwt", SECRET), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn owner_check_requires_exact_match() {
        assert!(authorize_owner("a@b.com", "a@b.com").is_ok());
        assert!(matches!(authorize_owner("a@b.com", "c@d.com"), Err(AuthError::NotOwner)));
        assert!(matches!(authorize_owner("a@b.com", ""), Err(AuthError::NotOwner)));
    }

    fn profile_with_role(role: Option<&str>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            name: None,
            education: None,
            address: None,
            phone: None,
            img: None,
            role: role.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn admin_check_requires_admin_role() {
        let admin = profile_with_role(Some("admin"));
        assert!(authorize_admin(Some(&admin)).is_ok());

        let plain = profile_with_role(None);
        assert!(matches!(authorize_admin(Some(&plain)), Err(AuthError::NotAdmin)));

        let other = profile_with_role(Some("moderator"));
        assert!(matches!(authorize_admin(Some(&other)), Err(AuthError::NotAdmin)));

        assert!(matches!(authorize_admin(None), Err(AuthError::NotAdmin)));
    }
}
