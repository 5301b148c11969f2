//! Pricing route handlers

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::catalog::load_catalog;
use crate::error::{AppError, Result};
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;
use super::services::quote;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/pricing/quote", post(quote_handler))
}

/// Live quote for the booking form
async fn quote_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation("Invalid JSON payload".to_string()))?;

    let catalog = load_catalog(&state.db, &state.cache).await;
    let response = quote(&catalog, &request)?;
    tracing::debug!(
        "Quote {} x{}: {}",
        request.duration,
        request.party_size,
        response.total_formatted
    );

    Ok(Json(response))
}
