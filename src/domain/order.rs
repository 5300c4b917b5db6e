//! Order payload validation and reference generation.
//!
//! Orders are never persisted: a validated payload lives for the duration
//! of one request and the two notification emails it feeds.

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cart::CartLineItem;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hard-coded pattern"));
// Spanish mobile numbers: nine digits, nothing else.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("hard-coded pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Nine digits after stripping whitespace.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&strip_whitespace(phone))
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Human-readable order reference: `PED-<epoch millis>-<3-digit suffix>`.
/// A display string for emails, not a stored key.
pub fn generate_order_number() -> String {
    let suffix = rand::thread_rng().gen_range(0..1000);
    format!("PED-{}-{:03}", Utc::now().timestamp_millis(), suffix)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Raw body of `POST /api/orders/process-order`, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRequest {
    pub customer_info: Option<CustomerInfo>,
    pub items: Option<Vec<CartLineItem>>,
    pub total: Option<Decimal>,
    pub bizum_phone: Option<String>,
}

/// First failing rule wins; each variant carries the product copy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("Datos del pedido incompletos")]
    Incomplete,
    #[error("Nombre y email son obligatorios")]
    MissingCustomerFields,
    #[error("Email no válido")]
    InvalidEmail,
    #[error("Teléfono no válido. Debe contener solo números (9 dígitos)")]
    InvalidPhone,
    #[error("Número de Bizum no válido")]
    InvalidBizumPhone,
    #[error("Total del pedido no válido")]
    InvalidTotal,
}

/// A validated, normalized order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub order_number: String,
    pub customer_info: CustomerInfo,
    pub items: Vec<CartLineItem>,
    pub total: Decimal,
    pub payment_method: &'static str,
    pub bizum_phone: String,
}

impl OrderRequest {
    /// Validation order: structure, customer fields, email shape, optional
    /// phone, Bizum phone, total. On success the customer fields are
    /// normalized (trimmed name, lowercased email, phone without spaces)
    /// and an order reference is generated.
    pub fn validate(self) -> Result<OrderData, OrderValidationError> {
        let (Some(customer), Some(items)) = (self.customer_info, self.items) else {
            return Err(OrderValidationError::Incomplete);
        };
        if items.is_empty() {
            return Err(OrderValidationError::Incomplete);
        }
        if customer.name.trim().is_empty() || customer.email.is_empty() {
            return Err(OrderValidationError::MissingCustomerFields);
        }
        if !is_valid_email(&customer.email) {
            return Err(OrderValidationError::InvalidEmail);
        }
        let phone = strip_whitespace(&customer.phone);
        if !phone.is_empty() && !PHONE_RE.is_match(&phone) {
            return Err(OrderValidationError::InvalidPhone);
        }
        let bizum_phone = strip_whitespace(&self.bizum_phone.unwrap_or_default());
        if !PHONE_RE.is_match(&bizum_phone) {
            return Err(OrderValidationError::InvalidBizumPhone);
        }
        let total = self.total.unwrap_or_default();
        if total <= Decimal::ZERO {
            return Err(OrderValidationError::InvalidTotal);
        }
        Ok(OrderData {
            order_number: generate_order_number(),
            customer_info: CustomerInfo {
                name: customer.name.trim().to_string(),
                email: customer.email.trim().to_lowercase(),
                phone,
            },
            items,
            total,
            payment_method: "bizum",
            bizum_phone,
        })
    }
}

/// Body the checkout flow POSTs to `/api/orders/process-order`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub customer_info: CustomerInfo,
    pub items: Vec<CartLineItem>,
    pub total: Decimal,
    pub bizum_phone: String,
}
