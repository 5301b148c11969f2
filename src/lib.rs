//! Backend for the Thai/English tour booking website.
//!
//! Serves the tour catalog, live price quotes, booking submission and the
//! admin endpoints behind the booking dashboard.

pub mod admin;
pub mod booking;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod pricing;
pub mod storage;

use std::sync::Arc;

use axum::{extract::State, middleware, routing::{get, post}, Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cache::AppCache;
use crate::config::Config;
use crate::notify::Mailer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub config: Arc<Config>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db,
            cache: AppCache::new(config.catalog_cache_ttl),
            config: Arc::new(config),
            mailer,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .merge(catalog::admin_router())
        .merge(booking::admin_router())
        .route("/api/send-booking", post(notify::routes::send_booking))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin::require_admin));

    Router::new()
        .route("/api/health", get(health))
        .merge(pricing::router())
        .merge(catalog::router())
        .merge(booking::router())
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}
