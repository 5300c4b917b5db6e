//! Domain logic: catalog records, the cart state machine, the checkout
//! workflow and order validation.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod order;
pub mod product;
pub mod search;

pub use cart::{Cart, CartLineItem};
pub use checkout::{CheckoutFlow, CheckoutStage};
pub use order::{CustomerInfo, OrderData};
pub use product::Product;
