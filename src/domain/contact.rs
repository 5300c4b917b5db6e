//! Contact form submission.

use serde::{Deserialize, Serialize};

/// Forwarded as-is into one notification email; the transport is the only
/// validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}
