//! Catalog route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pricing::Duration;
use crate::AppState;

use super::models::TourType;
use super::queries;
use super::requests::{build_price_payload, NewLocationRequest, NewTourTypeRequest, UpdatePricesRequest};
use super::responses::{CatalogResponse, LocationView};
use super::services::load_catalog;

/// Public catalog routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(catalog))
        .route("/api/catalog/locations", get(locations))
}

/// Admin catalog routes; the caller layers the admin gate on top
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/tour-types", post(create_tour_type))
        .route("/api/admin/tour-types/:id", delete(delete_tour_type))
        .route("/api/admin/locations", post(create_location))
        .route("/api/admin/locations/:id", delete(delete_location))
        .route("/api/admin/locations/:id/prices", put(update_prices))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    #[serde(default)]
    pub tour_type: String,
    #[serde(default)]
    pub duration: Option<String>,
}

fn invalid_json(_: JsonRejection) -> AppError {
    AppError::Validation("Invalid JSON payload".to_string())
}

/// Full catalog for the booking form
pub async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = load_catalog(&state.db, &state.cache).await;
    Json(CatalogResponse::new(&catalog, &state.config.storage))
}

/// Locations bookable for a tour type and duration (full day when omitted)
pub async fn locations(
    State(state): State<AppState>,
    Query(filter): Query<LocationFilter>,
) -> Result<Json<Vec<LocationView>>> {
    let duration = match filter.duration.as_deref().map(str::trim) {
        None | Some("") => Duration::Full,
        Some(raw) => Duration::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("Unknown duration: {}", raw)))?,
    };

    let catalog = load_catalog(&state.db, &state.cache).await;
    let views = catalog
        .filter_locations(&filter.tour_type, duration)
        .into_iter()
        .map(|l| LocationView::new(l, &state.config.storage))
        .collect();

    Ok(Json(views))
}

pub async fn create_tour_type(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewTourTypeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TourType>)> {
    let Json(request) = payload.map_err(invalid_json)?;
    let tour_type = request
        .into_tour_type(Uuid::new_v4().to_string())
        .map_err(AppError::Validation)?;

    queries::insert_tour_type(&state.db, &tour_type).await?;
    state.cache.invalidate_catalog().await;
    tracing::info!("Tour type {} added", tour_type.id);

    Ok((StatusCode::CREATED, Json(tour_type)))
}

pub async fn delete_tour_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !queries::delete_tour_type(&state.db, &id).await? {
        return Err(AppError::NotFound);
    }
    state.cache.invalidate_catalog().await;
    tracing::info!("Tour type {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_location(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewLocationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let Json(request) = payload.map_err(invalid_json)?;
    let id = Uuid::new_v4().to_string();
    let location = request
        .into_raw_location(id.clone())
        .map_err(AppError::Validation)?;

    queries::insert_location(&state.db, &id, &location).await?;
    state.cache.invalidate_catalog().await;
    tracing::info!("Location {} added", id);

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// Replace a location's prices; every duration it offers needs one
pub async fn update_prices(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdatePricesRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = payload.map_err(invalid_json)?;

    let catalog = load_catalog(&state.db, &state.cache).await;
    let durations = catalog
        .location(&id)
        .map(|l| l.available_durations.clone())
        .ok_or(AppError::NotFound)?;
    let prices =
        build_price_payload(&request.price_per_person, &durations).map_err(AppError::Validation)?;

    if !queries::update_location_prices(&state.db, &id, &prices).await? {
        return Err(AppError::NotFound);
    }
    state.cache.invalidate_catalog().await;

    Ok(Json(json!({ "id": id, "pricePerPerson": prices })))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !queries::delete_location(&state.db, &id).await? {
        return Err(AppError::NotFound);
    }
    state.cache.invalidate_catalog().await;
    tracing::info!("Location {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
