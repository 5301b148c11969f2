//! Database queries for the tour catalog.
//!
//! Writes store exactly what the admin submitted; defaults are only applied
//! on read, by the normalizer.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::Result;

use super::models::{LocationRow, PricePerPerson, RawLocation, TourType};

/// List all tour types in creation order
pub async fn list_tour_types(pool: &PgPool) -> Result<Vec<TourType>> {
    let tour_types = sqlx::query_as::<_, TourType>(
        r#"
        SELECT id, label_th, label_en, description_th, description_en
        FROM tour_types
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(tour_types)
}

pub async fn insert_tour_type(pool: &PgPool, tour_type: &TourType) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO tour_types (id, label_th, label_en, description_th, description_en)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&tour_type.id)
    .bind(&tour_type.label_th)
    .bind(&tour_type.label_en)
    .bind(&tour_type.description_th)
    .bind(&tour_type.description_en)
    .execute(pool)
    .await?;

    Ok(())
}

/// Hard delete; locations and bookings that reference the id are left as is.
/// Returns false when nothing was deleted.
pub async fn delete_tour_type(pool: &PgPool, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tour_types WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List all locations as authored (not normalized)
pub async fn list_locations(pool: &PgPool) -> Result<Vec<RawLocation>> {
    let rows = sqlx::query_as::<_, LocationRow>(
        r#"
        SELECT
            id,
            name_th,
            name_en,
            area_th,
            area_en,
            description_th,
            description_en,
            image_path,
            highlights,
            tour_type_ids,
            available_durations,
            price_per_person
        FROM locations
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(RawLocation::from).collect())
}

/// Insert a location. The caller must have assigned `location.id`.
pub async fn insert_location(pool: &PgPool, id: &str, location: &RawLocation) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO locations (
            id, name_th, name_en, area_th, area_en,
            description_th, description_en, image_path,
            highlights, tour_type_ids, available_durations, price_per_person
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(id)
    .bind(&location.name_th)
    .bind(&location.name_en)
    .bind(&location.area_th)
    .bind(&location.area_en)
    .bind(&location.description_th)
    .bind(&location.description_en)
    .bind(&location.image_path)
    .bind(location.highlights.as_ref().map(Json))
    .bind(location.tour_type_ids.as_ref().map(Json))
    .bind(location.available_durations.as_ref().map(Json))
    .bind(location.price_per_person.as_ref().map(Json))
    .execute(pool)
    .await?;

    Ok(())
}

/// Replace a location's price map. Returns false when the location is unknown.
pub async fn update_location_prices(
    pool: &PgPool,
    id: &str,
    prices: &PricePerPerson,
) -> Result<bool> {
    let result = sqlx::query("UPDATE locations SET price_per_person = $2 WHERE id = $1")
        .bind(id)
        .bind(Json(prices))
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_location(pool: &PgPool, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM locations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
