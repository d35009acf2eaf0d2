use axum::extract::State;
use axum::Json;

use crate::database::models::review::{self, Review, ReviewDraft};
use crate::database::InsertResult;
use crate::error::ApiError;
use crate::AppState;

/// GET /reviews - newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(review::find_all_newest_first(&state.pool).await?))
}

/// POST /reviews
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ReviewDraft>,
) -> Result<Json<InsertResult>, ApiError> {
    Ok(Json(review::insert(&state.pool, &draft).await?))
}
