//! Catalog products and input validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub hover_image: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Nombre, precio y categoría son requeridos")]
    MissingFields,
    #[error("El precio no puede ser negativo")]
    NegativePrice,
    #[error("La descripción no puede superar los 500 caracteres")]
    DescriptionTooLong,
}

/// Body of `POST /api/products`. Every field is optional so missing data
/// answers with the product copy instead of a decode rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub hover_image: Option<String>,
    pub description: Option<String>,
}

impl NewProduct {
    /// Requires name, price and category; `hover_image` falls back to
    /// `image`, everything else defaults to empty.
    pub fn into_product(self) -> Result<Product, ProductError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let (Some(name), Some(price), Some(category)) = (name, self.price, category) else {
            return Err(ProductError::MissingFields);
        };
        if price.is_sign_negative() {
            return Err(ProductError::NegativePrice);
        }
        let description = self.description.unwrap_or_default();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ProductError::DescriptionTooLong);
        }
        let image = self.image.unwrap_or_default();
        let hover_image = self
            .hover_image
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| image.clone());
        let now = Utc::now();
        Ok(Product {
            id: Uuid::now_v7(),
            name,
            price,
            category,
            image,
            hover_image,
            description,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Body of `PUT /api/products/:id`. Absent fields keep their stored value.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub hover_image: Option<String>,
    pub description: Option<String>,
}

impl ProductUpdate {
    /// Validates the provided fields and resolves the hover-image fallback:
    /// a new `image` without a matching `hover_image` replaces both.
    pub fn normalized(mut self) -> Result<Self, ProductError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ProductError::MissingFields);
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(ProductError::MissingFields);
            }
        }
        if let Some(price) = self.price {
            if price.is_sign_negative() {
                return Err(ProductError::NegativePrice);
            }
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(ProductError::DescriptionTooLong);
            }
        }
        if self.hover_image.is_none() {
            self.hover_image = self.image.clone();
        }
        Ok(self)
    }

    /// Field-by-field replacement, mirroring the COALESCE update the
    /// Postgres store runs.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(hover_image) = self.hover_image {
            product.hover_image = hover_image;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        product.updated_at = Utc::now();
    }
}
