//! Product persistence.

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::product::{Product, ProductUpdate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row-level access to the product collection. Single-document operations
/// only; no multi-step transactions.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    async fn insert(&self, product: Product) -> Result<Product, StoreError>;

    /// Applies the provided fields; `None` when the id is unknown.
    async fn update(&self, id: Uuid, update: ProductUpdate)
        -> Result<Option<Product>, StoreError>;

    /// True when a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
