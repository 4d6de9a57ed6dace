use std::path::Path;
use crate::models::Cheese;
use crate::services::catalog::{CatalogStore, StoreError};

/// Read a JSON array of cheeses from disk
///
/// Both the current and the legacy field names are accepted.
pub async fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Cheese>, StoreError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let cheeses: Vec<Cheese> = serde_json::from_str(&content)?;

    tracing::debug!(
        "Parsed {} cheeses from {}",
        cheeses.len(),
        path.as_ref().display()
    );

    Ok(cheeses)
}

/// Upsert every cheese in the seed file into the store
pub async fn seed_catalog<P: AsRef<Path>>(
    store: &dyn CatalogStore,
    path: P,
) -> Result<u64, StoreError> {
    let cheeses = load_seed_file(path).await?;
    store.upsert_many(cheeses).await
}

/// Seed the store only when it holds no cheeses
///
/// Returns the number of cheeses written, 0 when the store was already
/// populated.
pub async fn seed_if_empty<P: AsRef<Path>>(
    store: &dyn CatalogStore,
    path: P,
) -> Result<u64, StoreError> {
    if store.count().await? > 0 {
        tracing::info!("Catalog already initialized, skipping seed");
        return Ok(0);
    }

    tracing::info!("Catalog empty, seeding from {}", path.as_ref().display());
    seed_catalog(store, path).await
}
