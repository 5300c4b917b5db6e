//! Environment configuration, read once at startup.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub smtp_relay: String,
    pub email_user: String,
    pub email_pass: String,
    /// Address that receives admin order alerts and contact messages.
    pub recipient_email: String,
    /// Shipped to the admin panel and compared in the browser. Not a
    /// server-side secret.
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a number")?,
            Err(_) => 5000,
        };
        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL is required")?,
            smtp_relay: std::env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".into()),
            email_user: std::env::var("EMAIL_USER").context("EMAIL_USER is required")?,
            email_pass: std::env::var("EMAIL_PASS").context("EMAIL_PASS is required")?,
            recipient_email: std::env::var("RECIPIENT_EMAIL")
                .context("RECIPIENT_EMAIL is required")?,
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}
