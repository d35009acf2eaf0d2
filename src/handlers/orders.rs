use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth;
use crate::database::models::order::{self, Order, OrderDraft};
use crate::database::{DeleteResult, InsertResult};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

/// GET /orders?email= - gated; the token's email must match the requested
/// owner, otherwise the caller learns nothing.
pub async fn list_own(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let email = query.email.unwrap_or_default();
    auth::authorize_owner(&user.email, &email)?;

    Ok(Json(order::find_by_email(&state.pool, &email).await?))
}

/// POST /orders
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> Result<Json<InsertResult>, ApiError> {
    Ok(Json(order::insert(&state.pool, &draft).await?))
}

/// DELETE /orders/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(order::delete(&state.pool, id).await?))
}
