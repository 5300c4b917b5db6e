//! Postgres-backed product store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ProductStore, StoreError};
use crate::domain::product::{Product, ProductUpdate};

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(products)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let created = sqlx::query_as::<_, Product>(
            "INSERT INTO products (id, name, price, category, image, hover_image, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.image)
        .bind(&product.hover_image)
        .bind(&product.description)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        update: ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        let updated = sqlx::query_as::<_, Product>(
            "UPDATE products SET \
                name = COALESCE($2, name), \
                price = COALESCE($3, price), \
                category = COALESCE($4, category), \
                image = COALESCE($5, image), \
                hover_image = COALESCE($6, hover_image), \
                description = COALESCE($7, description), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(update.name)
        .bind(update.price)
        .bind(update.category)
        .bind(update.image)
        .bind(update.hover_image)
        .bind(update.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
