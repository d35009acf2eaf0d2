use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::{DeleteResult, InsertResult};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    /// Owner of the order; the owner-gated list route filters on this.
    pub email: String,
    pub product: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct OrderDraft {
    pub email: String,
    pub product: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, email, product, quantity, price, address, phone, created_at
         FROM orders
         WHERE email = $1",
    )
    .bind(email)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, draft: &OrderDraft) -> Result<InsertResult, sqlx::Error> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO orders (email, product, quantity, price, address, phone)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(&draft.email)
    .bind(&draft.product)
    .bind(draft.quantity)
    .bind(draft.price)
    .bind(&draft.address)
    .bind(&draft.phone)
    .fetch_one(pool)
    .await?;

    Ok(InsertResult::new(id))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<DeleteResult, sqlx::Error> {
    let deleted = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(DeleteResult::new(deleted))
}
