use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::database::models::trim::{self, Trim, TrimDraft};
use crate::database::{DeleteResult, InsertResult, UpdateResult};
use crate::error::ApiError;
use crate::AppState;

use super::{coerce_int, parse_id};

/// GET /trims
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Trim>>, ApiError> {
    Ok(Json(trim::find_all(&state.pool).await?))
}

/// GET /trims/:id - an absent id serializes as null, not 404
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Trim>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(trim::find_by_id(&state.pool, id).await?))
}

/// POST /trims
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<TrimDraft>,
) -> Result<Json<InsertResult>, ApiError> {
    Ok(Json(trim::insert(&state.pool, &draft).await?))
}

/// Restock and delivery both send the new absolute quantity.
#[derive(Debug, Deserialize)]
pub struct QuantityUpdate {
    #[serde(rename = "updatedQtty", deserialize_with = "coerce_int")]
    pub updated_qtty: i32,
}

/// PUT /trims/:id
pub async fn replace_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<QuantityUpdate>,
) -> Result<Json<UpdateResult>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(trim::replace_quantity(&state.pool, id, body.updated_qtty).await?))
}

/// DELETE /trims/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(trim::delete(&state.pool, id).await?))
}
