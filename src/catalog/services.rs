//! Catalog loading and lookups.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, warn};

use crate::cache::AppCache;
use crate::error::Result;
use crate::pricing::Duration;

use super::defaults::{default_locations, default_tour_types};
use super::models::{Location, RawLocation, TourType};
use super::normalize::normalize_location;
use super::queries;

/// Tour types plus normalized locations, as shown on the booking form
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub tour_types: Vec<TourType>,
    pub locations: Vec<Location>,
}

impl Catalog {
    /// Build a catalog from stored records. An empty table falls back to the
    /// built-in records for that table only.
    pub fn from_records(tour_types: Vec<TourType>, raw_locations: Vec<RawLocation>) -> Self {
        let tour_types = if tour_types.is_empty() {
            default_tour_types()
        } else {
            tour_types
        };
        let raw_locations = if raw_locations.is_empty() {
            default_locations()
        } else {
            raw_locations
        };

        let all_tour_type_ids = tour_type_ids(&tour_types);
        let locations = raw_locations
            .iter()
            .map(|raw| normalize_location(raw, &all_tour_type_ids))
            .collect();

        Self {
            tour_types,
            locations,
        }
    }

    /// The built-in catalog
    pub fn defaults() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// Ids of all known tour types, skipping blank ids
    pub fn tour_type_ids(&self) -> Vec<String> {
        tour_type_ids(&self.tour_types)
    }

    pub fn tour_type(&self, id: &str) -> Option<&TourType> {
        self.tour_types.iter().find(|t| t.id == id)
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Locations bookable for a tour type and duration, in catalog order
    pub fn filter_locations(&self, tour_type: &str, duration: Duration) -> Vec<&Location> {
        filter_locations(&self.locations, tour_type, duration)
    }

    /// The requested location if it matches the filter, otherwise the first
    /// location that does.
    pub fn select_location(
        &self,
        tour_type: &str,
        duration: Duration,
        requested_id: &str,
    ) -> Option<&Location> {
        let matching = self.filter_locations(tour_type, duration);
        matching
            .iter()
            .find(|l| l.id == requested_id)
            .or_else(|| matching.first())
            .copied()
    }
}

/// Locations offering the tour type and duration, order preserved
pub fn filter_locations<'a>(
    locations: &'a [Location],
    tour_type: &str,
    duration: Duration,
) -> Vec<&'a Location> {
    locations
        .iter()
        .filter(|l| l.offers(tour_type, duration))
        .collect()
}

fn tour_type_ids(tour_types: &[TourType]) -> Vec<String> {
    tour_types
        .iter()
        .filter(|t| !t.id.is_empty())
        .map(|t| t.id.clone())
        .collect()
}

/// Read the catalog from the database and normalize it.
pub async fn fetch_catalog(pool: &PgPool) -> Result<Catalog> {
    let tour_types = queries::list_tour_types(pool).await?;
    let locations = queries::list_locations(pool).await?;
    Ok(Catalog::from_records(tour_types, locations))
}

/// Catalog for request handling: cache first, then database. A failed load
/// serves the built-in catalog and is not cached.
pub async fn load_catalog(pool: &PgPool, cache: &AppCache) -> Arc<Catalog> {
    if let Some(cached) = cache.catalog.get(AppCache::CATALOG_KEY).await {
        debug!("Cache HIT for catalog");
        return cached;
    }

    debug!("Cache MISS for catalog");
    let seen = cache.catalog_generation();
    match fetch_catalog(pool).await {
        Ok(catalog) => {
            let catalog = Arc::new(catalog);
            cache.store_catalog(seen, catalog.clone()).await;
            catalog
        }
        Err(e) => {
            warn!("Failed to load catalog, serving defaults: {}", e);
            Arc::new(Catalog::defaults())
        }
    }
}
