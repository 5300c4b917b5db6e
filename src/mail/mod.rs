//! Outbound email.
//!
//! Both notification services talk to the relay through the [`Mailer`]
//! seam so tests can stub delivery.

pub mod smtp;
pub mod templates;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

/// A rendered message, ready for the relay.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("message build failed: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp failure: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}
