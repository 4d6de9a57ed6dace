use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use crate::models::Cheese;

/// Errors that can occur in a catalog store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Cheese not found: {0}")]
    NotFound(String),

    #[error("Cheese already exists: {0}")]
    Conflict(String),

    #[error("Seed file error: {0}")]
    SeedIoError(#[from] std::io::Error),

    #[error("Seed data error: {0}")]
    SeedFormatError(#[from] serde_json::Error),
}

/// Record store for the cheese catalog
///
/// The recommendation engine only consumes `get_all`; the rest backs the
/// catalog endpoints.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend name for health output
    fn backend(&self) -> &'static str;

    /// All cheeses, in insertion order
    async fn get_all(&self) -> Result<Vec<Cheese>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Cheese, StoreError>;

    /// Insert a new cheese; fails with `Conflict` when the id is taken
    async fn insert(&self, cheese: Cheese) -> Result<(), StoreError>;

    /// Replace an existing cheese; fails with `NotFound` when missing
    async fn update(&self, id: &str, cheese: Cheese) -> Result<(), StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Case-insensitive match on name, flavor notes, region or category
    async fn search(&self, query: &str) -> Result<Vec<Cheese>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Insert or replace every cheese, returning how many were written
    async fn upsert_many(&self, cheeses: Vec<Cheese>) -> Result<u64, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

/// Whether a cheese matches a free-text catalog search
pub fn matches_search(cheese: &Cheese, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        cheese.name.as_str(),
        cheese.flavor_notes.as_str(),
        cheese.region.as_str(),
        cheese.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// In-process catalog, used for local runs and tests
#[derive(Default)]
pub struct InMemoryCatalog {
    items: RwLock<Vec<Cheese>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Cheese>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get_all(&self) -> Result<Vec<Cheese>, StoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Cheese, StoreError> {
        self.items
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, cheese: Cheese) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if items.iter().any(|c| c.id == cheese.id) {
            return Err(StoreError::Conflict(cheese.id));
        }
        items.push(cheese);
        Ok(())
    }

    async fn update(&self, id: &str, cheese: Cheese) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = Cheese {
            id: id.to_string(),
            ..cheese
        };
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|c| c.id != id);
        if items.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<Cheese>, StoreError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|c| matches_search(c, query))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn upsert_many(&self, cheeses: Vec<Cheese>) -> Result<u64, StoreError> {
        let mut items = self.items.write().await;
        let written = cheeses.len() as u64;
        for cheese in cheeses {
            match items.iter_mut().find(|c| c.id == cheese.id) {
                Some(slot) => *slot = cheese,
                None => items.push(cheese),
            }
        }
        Ok(written)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
