use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::{DeleteResult, InsertResult, UpdateResult};

/// A stock item in the trims collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trim {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: i32,
    pub supplier: Option<String>,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-submitted fields for a new trim.
#[derive(Debug, Deserialize)]
pub struct TrimDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub supplier: Option<String>,
    pub img: Option<String>,
}

const COLUMNS: &str = "id, name, description, price, quantity, supplier, img, created_at";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Trim>, sqlx::Error> {
    sqlx::query_as::<_, Trim>(&format!("SELECT {COLUMNS} FROM trims"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Trim>, sqlx::Error> {
    sqlx::query_as::<_, Trim>(&format!("SELECT {COLUMNS} FROM trims WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, draft: &TrimDraft) -> Result<InsertResult, sqlx::Error> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO trims (name, description, price, quantity, supplier, img)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(&draft.name)
    .bind(&draft.description)
    .bind(draft.price)
    .bind(draft.quantity.unwrap_or(0))
    .bind(&draft.supplier)
    .bind(&draft.img)
    .fetch_one(pool)
    .await?;

    Ok(InsertResult::new(id))
}

/// Replace-style quantity upsert. Concurrent writers are last-write-wins;
/// the quantity is never incremented in place.
pub async fn replace_quantity(
    pool: &PgPool,
    id: Uuid,
    quantity: i32,
) -> Result<UpdateResult, sqlx::Error> {
    let matched = sqlx::query("UPDATE trims SET quantity = $2 WHERE id = $1")
        .bind(id)
        .bind(quantity)
        .execute(pool)
        .await?
        .rows_affected();

    if matched > 0 {
        return Ok(UpdateResult::replaced(matched));
    }

    sqlx::query(
        "INSERT INTO trims (id, quantity) VALUES ($1, $2)
         ON CONFLICT (id) DO UPDATE SET quantity = EXCLUDED.quantity",
    )
    .bind(id)
    .bind(quantity)
    .execute(pool)
    .await?;

    Ok(UpdateResult::upserted(id))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<DeleteResult, sqlx::Error> {
    let deleted = sqlx::query("DELETE FROM trims WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(DeleteResult::new(deleted))
}
