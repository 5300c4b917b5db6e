//! Shared application state.

use std::sync::Arc;

use crate::mail::Mailer;
use crate::store::ProductStore;

/// Handed to every request handler. Holds the two external collaborators
/// (product store, mail relay) plus the admin alert address.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub mailer: Arc<dyn Mailer>,
    pub recipient_email: String,
}
