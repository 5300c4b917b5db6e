//! In-memory product store, used by tests and local development.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ProductStore, StoreError};
use crate::domain::product::{Product, ProductUpdate};

#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.lock().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .lock()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        self.products.lock().await.push(product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: Uuid,
        update: ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.lock().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        update.apply(product);
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut products = self.products.lock().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }
}
