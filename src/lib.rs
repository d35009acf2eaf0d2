use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use config::AppConfig;

/// Shared per-process resources, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self { pool, config: Arc::new(config) }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/login", post(handlers::login::create_token))
        .route("/trims", get(handlers::trims::list).post(handlers::trims::create))
        .route(
            "/trims/:id",
            get(handlers::trims::show)
                .put(handlers::trims::replace_quantity)
                .delete(handlers::trims::remove),
        )
        .route("/reviews", get(handlers::reviews::list).post(handlers::reviews::create))
        .route("/orders", get(handlers::orders::list_own).post(handlers::orders::create))
        .route("/orders/:id", delete(handlers::orders::remove))
        .route("/profile/:email", put(handlers::profiles::upsert))
        .route("/profiles", get(handlers::profiles::list_all))
        .route("/profiles/admin/:email", put(handlers::profiles::grant_admin))
        .route("/profiles/:id", delete(handlers::profiles::remove))
        .route("/admin/:email", get(handlers::profiles::admin_flag))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
