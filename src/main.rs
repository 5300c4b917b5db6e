//! Escaparate server binary.

use std::sync::Arc;

use anyhow::Result;
use escaparate::mail::SmtpMailer;
use escaparate::store::PgProductStore;
use escaparate::{api, AppState, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    let mailer = SmtpMailer::from_config(&config)?;
    let state = AppState {
        store: Arc::new(PgProductStore::new(db)),
        mailer: Arc::new(mailer),
        recipient_email: config.recipient_email.clone(),
    };

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("🚀 Escaparate listening on 0.0.0.0:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
