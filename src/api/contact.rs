//! Contact form relay.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::domain::contact::ContactMessage;
use crate::error::ApiError;
use crate::mail::templates;
use crate::state::AppState;

pub async fn send_contact_email(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<Value>, ApiError> {
    let email = templates::contact_notification(&message, &state.recipient_email);
    state
        .mailer
        .send(email)
        .await
        .map_err(|e| ApiError::upstream("Error al enviar email", e))?;
    Ok(Json(json!({ "message": "Email enviado correctamente" })))
}
