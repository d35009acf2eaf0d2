use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::{DeleteResult, UpdateResult};

/// Keyed by email for upsert, but deleted by id like every other collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub education: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub img: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement document for PUT /profile/:email. Fields the client
/// leaves out are cleared, matching replace-style upsert semantics.
#[derive(Debug, Deserialize)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub education: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub img: Option<String>,
    pub role: Option<String>,
}

const COLUMNS: &str = "id, email, name, education, address, phone, img, role, created_at";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(&format!("SELECT {COLUMNS} FROM profiles"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(&format!("SELECT {COLUMNS} FROM profiles WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Replace-or-insert keyed by the unique email column, so repeating the
/// same PUT yields one row, never two.
pub async fn upsert_by_email(
    pool: &PgPool,
    email: &str,
    draft: &ProfileDraft,
) -> Result<UpdateResult, sqlx::Error> {
    let matched = sqlx::query(
        "UPDATE profiles
         SET name = $2, education = $3, address = $4, phone = $5, img = $6, role = $7
         WHERE email = $1",
    )
    .bind(email)
    .bind(&draft.name)
    .bind(&draft.education)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(&draft.img)
    .bind(&draft.role)
    .execute(pool)
    .await?
    .rows_affected();

    if matched > 0 {
        return Ok(UpdateResult::replaced(matched));
    }

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO profiles (email, name, education, address, phone, img, role)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (email) DO UPDATE
         SET name = EXCLUDED.name, education = EXCLUDED.education,
             address = EXCLUDED.address, phone = EXCLUDED.phone,
             img = EXCLUDED.img, role = EXCLUDED.role
         RETURNING id",
    )
    .bind(email)
    .bind(&draft.name)
    .bind(&draft.education)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(&draft.img)
    .bind(&draft.role)
    .fetch_one(pool)
    .await?;

    Ok(UpdateResult::upserted(id))
}

pub async fn grant_admin(pool: &PgPool, email: &str) -> Result<UpdateResult, sqlx::Error> {
    let matched = sqlx::query("UPDATE profiles SET role = 'admin' WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(UpdateResult::replaced(matched))
}

pub async fn is_admin(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let role = sqlx::query_scalar::<_, Option<String>>("SELECT role FROM profiles WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(role.flatten().as_deref() == Some("admin"))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<DeleteResult, sqlx::Error> {
    let deleted = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(DeleteResult::new(deleted))
}
