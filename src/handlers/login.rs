use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::AppState;

/// Whatever the client submits becomes the token's claims; only the email
/// is required. There is no credential check beyond this.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// POST /login
pub async fn create_token(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let claims = Claims::new(body.email, body.extra);
    let access_token = auth::sign(&claims, &state.config.access_token_secret)?;

    Ok(Json(json!({ "accessToken": access_token })))
}
