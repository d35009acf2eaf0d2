use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::auth;
use crate::database::models::profile::{self, Profile, ProfileDraft};
use crate::database::{DeleteResult, UpdateResult};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

use super::parse_id;

/// PUT /profile/:email - replace-style upsert keyed by email
pub async fn upsert(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(draft): Json<ProfileDraft>,
) -> Result<Json<UpdateResult>, ApiError> {
    Ok(Json(profile::upsert_by_email(&state.pool, &email, &draft).await?))
}

/// GET /profiles - any valid token sees every profile
pub async fn list_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<Profile>>, ApiError> {
    Ok(Json(profile::find_all(&state.pool).await?))
}

/// PUT /profiles/admin/:email - only an existing admin may grant the role
pub async fn grant_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<UpdateResult>, ApiError> {
    let caller = profile::find_by_email(&state.pool, &user.email).await?;
    auth::authorize_admin(caller.as_ref())?;

    Ok(Json(profile::grant_admin(&state.pool, &email).await?))
}

/// GET /admin/:email - role projection for the frontend's admin toggle
pub async fn admin_flag(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let admin = profile::is_admin(&state.pool, &email).await?;
    Ok(Json(json!({ "admin": admin })))
}

/// DELETE /profiles/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(profile::delete(&state.pool, id).await?))
}
