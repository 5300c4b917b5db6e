//! Checkout workflow.
//!
//! An explicitly-owned state container for one browser session: it owns the
//! cart and the contact form and walks the
//! cart → contact form → payment instructions loop. Constructed per
//! session (or per test); never a process-wide singleton.

use thiserror::Error;

use crate::domain::cart::Cart;
use crate::domain::order::{self, CustomerInfo, OrderSubmission};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutStage {
    #[default]
    Cart,
    ContactForm,
    PaymentInstructions,
}

/// Form fields, retained across the back transition.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bizum_phone: String,
}

/// First failing rule, with the storefront copy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Tu carrito está vacío")]
    EmptyCart,
    #[error("Por favor completa todos los campos obligatorios")]
    MissingRequiredFields,
    #[error("Email no válido")]
    InvalidEmail,
    #[error("El número de Bizum debe tener exactamente 9 dígitos")]
    InvalidBizumPhone,
    #[error("El teléfono debe tener exactamente 9 dígitos o déjalo vacío")]
    InvalidPhone,
}

#[derive(Debug, Default)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    cart: Cart,
    form: ContactForm,
    order_number: Option<String>,
    error: Option<String>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn order_number(&self) -> Option<&str> {
        self.order_number.as_deref()
    }

    /// Message currently surfaced to the user, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_name(&mut self, value: &str) {
        self.form.name = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.form.email = value.to_string();
    }

    /// Phone inputs keep digits only, as the form field does.
    pub fn set_phone(&mut self, value: &str) {
        self.form.phone = digits_only(value);
    }

    pub fn set_bizum_phone(&mut self, value: &str) {
        self.form.bizum_phone = digits_only(value);
    }

    /// Cart → contact form. Guarded by a non-empty cart.
    pub fn begin(&mut self) -> Result<(), CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.stage = CheckoutStage::ContactForm;
        self.error = None;
        Ok(())
    }

    /// Validates the form and builds the payload to POST. On failure the
    /// first failing rule is surfaced and the flow stays in the form; no
    /// request is made.
    pub fn submit(&mut self) -> Result<OrderSubmission, CheckoutError> {
        if let Err(e) = self.validate_form() {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.error = None;
        Ok(OrderSubmission {
            customer_info: CustomerInfo {
                name: self.form.name.trim().to_string(),
                email: self.form.email.trim().to_string(),
                phone: self.form.phone.clone(),
            },
            items: self.cart.items().to_vec(),
            total: self.cart.total(),
            bizum_phone: self.form.bizum_phone.clone(),
        })
    }

    fn validate_form(&self) -> Result<(), CheckoutError> {
        if self.form.name.trim().is_empty() || self.form.email.trim().is_empty() {
            return Err(CheckoutError::MissingRequiredFields);
        }
        if !order::is_valid_email(self.form.email.trim()) {
            return Err(CheckoutError::InvalidEmail);
        }
        if !order::is_valid_phone(&self.form.bizum_phone) {
            return Err(CheckoutError::InvalidBizumPhone);
        }
        if !self.form.phone.is_empty() && !order::is_valid_phone(&self.form.phone) {
            return Err(CheckoutError::InvalidPhone);
        }
        Ok(())
    }

    /// Contact form → payment instructions, keeping the returned reference.
    pub fn order_accepted(&mut self, order_number: impl Into<String>) {
        self.order_number = Some(order_number.into());
        self.stage = CheckoutStage::PaymentInstructions;
        self.error = None;
    }

    /// Network or server failure: surface the message, stay in the form.
    /// The cart is untouched.
    pub fn order_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Payment instructions → cart, clearing everything.
    pub fn confirm(&mut self) {
        if self.stage != CheckoutStage::PaymentInstructions {
            return;
        }
        self.cart.clear();
        self.reset_form();
    }

    /// Payment instructions → contact form, values retained.
    pub fn back(&mut self) {
        if self.stage == CheckoutStage::PaymentInstructions {
            self.stage = CheckoutStage::ContactForm;
        }
    }

    /// Backs out to the cart view. Cart contents are preserved.
    pub fn cancel(&mut self) {
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form = ContactForm::default();
        self.order_number = None;
        self.error = None;
        self.stage = CheckoutStage::Cart;
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name: "Camiseta".into(),
            price: Decimal::new(125, 1),
            category: "Tops".into(),
            image: "camiseta.jpg".into(),
            hover_image: String::new(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn flow_with_items() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new();
        flow.cart_mut().add_item(&product(), 2);
        flow
    }

    fn fill_valid_form(flow: &mut CheckoutFlow) {
        flow.set_name("Ana García");
        flow.set_email("ana@example.com");
        flow.set_bizum_phone("612345678");
    }

    #[test]
    fn test_begin_requires_items() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.begin().unwrap_err(), CheckoutError::EmptyCart);
        assert_eq!(flow.stage(), CheckoutStage::Cart);

        let mut flow = flow_with_items();
        flow.begin().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::ContactForm);
    }

    #[test]
    fn test_submit_surfaces_first_failing_rule() {
        let mut flow = flow_with_items();
        flow.begin().unwrap();

        assert_eq!(
            flow.submit().unwrap_err(),
            CheckoutError::MissingRequiredFields
        );
        assert_eq!(
            flow.error(),
            Some("Por favor completa todos los campos obligatorios")
        );

        flow.set_name("Ana");
        flow.set_email("not-an-email");
        assert_eq!(flow.submit().unwrap_err(), CheckoutError::InvalidEmail);

        flow.set_email("ana@example.com");
        flow.set_bizum_phone("12345");
        assert_eq!(flow.submit().unwrap_err(), CheckoutError::InvalidBizumPhone);

        flow.set_bizum_phone("612345678");
        flow.set_phone("12");
        assert_eq!(flow.submit().unwrap_err(), CheckoutError::InvalidPhone);

        // Still collecting details; the cart survived every failure.
        assert_eq!(flow.stage(), CheckoutStage::ContactForm);
        assert!(!flow.cart().is_empty());
    }

    #[test]
    fn test_phone_inputs_keep_digits_only() {
        let mut flow = CheckoutFlow::new();
        flow.set_phone("612 34-56.78");
        assert_eq!(flow.form().phone, "612345678");
        flow.set_bizum_phone("+34 612345678");
        assert_eq!(flow.form().bizum_phone, "34612345678");
    }

    #[test]
    fn test_submit_snapshots_cart() {
        let mut flow = flow_with_items();
        flow.begin().unwrap();
        fill_valid_form(&mut flow);
        let submission = flow.submit().unwrap();
        assert_eq!(submission.items.len(), 1);
        assert_eq!(submission.items[0].quantity, 2);
        assert_eq!(submission.total, Decimal::new(25, 0));
        assert_eq!(submission.bizum_phone, "612345678");
    }

    #[test]
    fn test_order_accepted_then_confirm_clears_everything() {
        let mut flow = flow_with_items();
        flow.begin().unwrap();
        fill_valid_form(&mut flow);
        flow.submit().unwrap();
        flow.order_accepted("PED-1700000000000-042");
        assert_eq!(flow.stage(), CheckoutStage::PaymentInstructions);
        assert_eq!(flow.order_number(), Some("PED-1700000000000-042"));

        flow.confirm();
        assert_eq!(flow.stage(), CheckoutStage::Cart);
        assert!(flow.cart().is_empty());
        assert!(flow.form().name.is_empty());
        assert_eq!(flow.order_number(), None);
    }

    #[test]
    fn test_order_failed_keeps_form_and_cart() {
        let mut flow = flow_with_items();
        flow.begin().unwrap();
        fill_valid_form(&mut flow);
        flow.submit().unwrap();
        flow.order_failed("Error de conexión. Por favor intenta de nuevo.");
        assert_eq!(flow.stage(), CheckoutStage::ContactForm);
        assert_eq!(flow.form().name, "Ana García");
        assert!(!flow.cart().is_empty());
        assert!(flow.error().is_some());
    }

    #[test]
    fn test_back_retains_entered_values() {
        let mut flow = flow_with_items();
        flow.begin().unwrap();
        fill_valid_form(&mut flow);
        flow.submit().unwrap();
        flow.order_accepted("PED-1-001");
        flow.back();
        assert_eq!(flow.stage(), CheckoutStage::ContactForm);
        assert_eq!(flow.form().name, "Ana García");
        assert_eq!(flow.form().bizum_phone, "612345678");
    }

    #[test]
    fn test_cancel_preserves_cart() {
        let mut flow = flow_with_items();
        flow.begin().unwrap();
        flow.set_name("Ana");
        flow.cancel();
        assert_eq!(flow.stage(), CheckoutStage::Cart);
        assert!(flow.form().name.is_empty());
        assert_eq!(flow.cart().item_count(), 2);
    }
}
