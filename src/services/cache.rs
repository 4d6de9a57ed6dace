use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::models::Cheese;
use crate::services::catalog::{CatalogStore, StoreError};

/// In-process cache of the full catalog snapshot
///
/// Recommendation requests read the whole catalog, so the snapshot is
/// cached once and shared. Every catalog write must call `invalidate`
/// after the store write completes.
///
/// `generation` is bumped on every invalidation. A load that overlapped an
/// invalidation never leaves its snapshot behind in the cache.
pub struct CatalogCache {
    snapshots: moka::future::Cache<String, Arc<Vec<Cheese>>>,
    generation: AtomicU64,
    ttl_secs: u64,
}

impl CatalogCache {
    /// Create a new cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let snapshots = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            snapshots,
            generation: AtomicU64::new(0),
            ttl_secs,
        }
    }

    /// Get the catalog snapshot, loading it from the store on a miss
    pub async fn get_or_load(
        &self,
        store: &dyn CatalogStore,
    ) -> Result<Arc<Vec<Cheese>>, StoreError> {
        let key = CacheKey::catalog();

        if let Some(snapshot) = self.snapshots.get(&key).await {
            tracing::trace!("Catalog cache hit: {}", key);
            return Ok(snapshot);
        }

        tracing::trace!("Catalog cache miss: {}", key);
        let generation = self.generation.load(Ordering::Acquire);
        let snapshot = Arc::new(store.get_all().await?);
        self.snapshots.insert(key.clone(), snapshot.clone()).await;

        // Checked after the insert: an invalidation that lands later clears
        // the entry itself
        if self.generation.load(Ordering::Acquire) != generation {
            tracing::debug!("Catalog changed during load, discarding snapshot");
            self.snapshots.invalidate(&key).await;
        }

        Ok(snapshot)
    }

    /// Drop the cached snapshot
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.snapshots.invalidate(&CacheKey::catalog()).await;
        tracing::debug!("Invalidated catalog snapshot");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.snapshots.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build the cache key for the full catalog snapshot
    pub fn catalog() -> String {
        "catalog:all".to_string()
    }
}
