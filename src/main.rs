use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tour_booking_web::cache::start_cache_warmer;
use tour_booking_web::config::Config;
use tour_booking_web::notify::build_mailer;
use tour_booking_web::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tour_booking_web=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!()
        .run(&db)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let mailer = build_mailer(&config.mail)?;
    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD not set; admin routes run in demo mode");
    }

    let bind_addr = config.bind_addr.clone();
    let warm_period = config.catalog_cache_ttl;
    let state = AppState::new(db.clone(), config, Arc::clone(&mailer));

    tokio::spawn(start_cache_warmer(state.cache.clone(), db, warm_period));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
