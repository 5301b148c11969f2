//! In-memory caching using moka
//!
//! Holds the normalized catalog so the booking form and price quotes do not
//! hit the database on every request. Admin writes invalidate it.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::catalog::{fetch_catalog, Catalog};

/// Application cache
#[derive(Clone)]
pub struct AppCache {
    /// Normalized catalog (singleton under `CATALOG_KEY`)
    pub catalog: Cache<String, Arc<Catalog>>,
    /// Bumped on every invalidation; a load started under an older
    /// generation must not repopulate the cache
    generation: Arc<AtomicU64>,
}

impl AppCache {
    pub const CATALOG_KEY: &'static str = "catalog";

    /// Create a new cache instance with the given catalog TTL
    pub fn new(catalog_ttl: Duration) -> Self {
        Self {
            catalog: Cache::builder()
                .max_capacity(1)
                .time_to_live(catalog_ttl)
                .build(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current catalog generation; take this before reading the database
    pub fn catalog_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Cache a catalog read under generation `seen`.
    ///
    /// Returns false, leaving the cache empty, when an invalidation happened
    /// since `seen` was taken.
    pub async fn store_catalog(&self, seen: u64, catalog: Arc<Catalog>) -> bool {
        if self.catalog_generation() != seen {
            return false;
        }
        self.catalog
            .insert(Self::CATALOG_KEY.to_string(), catalog)
            .await;

        // An invalidation may have landed between the check and the insert
        if self.catalog_generation() != seen {
            self.catalog.invalidate(Self::CATALOG_KEY).await;
            return false;
        }
        true
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            catalog_cached: self.catalog.entry_count() > 0,
        }
    }

    /// Drop the cached catalog after an admin write
    pub async fn invalidate_catalog(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.catalog.invalidate(Self::CATALOG_KEY).await;
        info!("Catalog cache invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub catalog_cached: bool,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every `period`.
pub async fn start_cache_warmer(cache: AppCache, db: PgPool, period: Duration) {
    let mut interval = interval(period.max(Duration::from_secs(1)));
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

/// Reload the catalog from the database
async fn warm_cache(cache: &AppCache, db: &PgPool) {
    let seen = cache.catalog_generation();
    match fetch_catalog(db).await {
        Ok(catalog) => {
            if cache.store_catalog(seen, Arc::new(catalog)).await {
                info!("Catalog cache warmed. Stats: {:?}", cache.stats());
            } else {
                info!("Catalog changed while warming; leaving cache empty");
            }
        }
        Err(e) => warn!("Failed to warm catalog cache: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalidate_catalog() {
        let cache = AppCache::default();
        cache
            .catalog
            .insert(AppCache::CATALOG_KEY.to_string(), Arc::new(Catalog::defaults()))
            .await;
        assert!(cache.catalog.get(AppCache::CATALOG_KEY).await.is_some());

        cache.invalidate_catalog().await;
        assert!(cache.catalog.get(AppCache::CATALOG_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_store_catalog_after_invalidation_is_dropped() {
        let cache = AppCache::default();
        let seen = cache.catalog_generation();

        // Admin write lands while the catalog is being read
        cache.invalidate_catalog().await;

        assert!(!cache.store_catalog(seen, Arc::new(Catalog::defaults())).await);
        assert!(cache.catalog.get(AppCache::CATALOG_KEY).await.is_none());

        let fresh = cache.catalog_generation();
        assert!(cache.store_catalog(fresh, Arc::new(Catalog::defaults())).await);
        assert!(cache.catalog.get(AppCache::CATALOG_KEY).await.is_some());
    }
}
