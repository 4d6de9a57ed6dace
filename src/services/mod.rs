// Service exports
pub mod cache;
pub mod catalog;
pub mod postgres;
pub mod seed;

pub use cache::{CacheKey, CacheStats, CatalogCache};
pub use catalog::{CatalogStore, InMemoryCatalog, StoreError};
pub use postgres::PostgresCatalog;
pub use seed::{load_seed_file, seed_catalog, seed_if_empty};
