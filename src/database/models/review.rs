use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::InsertResult;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Newest first, so the storefront shows recent reviews without re-sorting.
pub async fn find_all_newest_first(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        "SELECT id, name, email, rating, comment, created_at
         FROM reviews
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, draft: &ReviewDraft) -> Result<InsertResult, sqlx::Error> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO reviews (name, email, rating, comment)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(&draft.name)
    .bind(&draft.email)
    .bind(draft.rating)
    .bind(&draft.comment)
    .fetch_one(pool)
    .await?;

    Ok(InsertResult::new(id))
}
