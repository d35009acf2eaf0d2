pub mod models;
pub mod results;

use sqlx::{postgres::PgPoolOptions, PgPool};

pub use results::{DeleteResult, InsertResult, UpdateResult};

pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Idempotently creates the storefront collections. Besides the id, the
/// email upsert key, and the quantity counter, every field is nullable.
pub async fn ensure_collections(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in [TRIMS_DDL, REVIEWS_DDL, ORDERS_DDL, PROFILES_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

const TRIMS_DDL: &str = "CREATE TABLE IF NOT EXISTS trims (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name TEXT,
    description TEXT,
    price DOUBLE PRECISION,
    quantity INTEGER NOT NULL DEFAULT 0,
    supplier TEXT,
    img TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const REVIEWS_DDL: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name TEXT,
    email TEXT,
    rating INTEGER,
    comment TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const ORDERS_DDL: &str = "CREATE TABLE IF NOT EXISTS orders (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email TEXT NOT NULL,
    product TEXT,
    quantity INTEGER,
    price DOUBLE PRECISION,
    address TEXT,
    phone TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const PROFILES_DDL: &str = "CREATE TABLE IF NOT EXISTS profiles (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    education TEXT,
    address TEXT,
    phone TEXT,
    img TEXT,
    role TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";
