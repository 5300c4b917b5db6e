//! Order intake: validate, then notify by email.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::domain::order::OrderRequest;
use crate::error::ApiError;
use crate::mail::templates;
use crate::state::AppState;

/// Validates the payload, generates the order reference and fires both
/// notification emails concurrently. Relay failures are logged and
/// swallowed: nothing durable depends on delivery, so the response only
/// reflects validation.
pub async fn process_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let request: OrderRequest = serde_json::from_value(body)
        .map_err(|_| ApiError::validation("Datos del pedido incompletos"))?;
    let order = request.validate()?;

    tracing::info!(
        order_number = %order.order_number,
        customer = %order.customer_info.name,
        total = %order.total,
        "processing order"
    );

    let confirmation = templates::customer_confirmation(&order);
    let alert = templates::admin_notification(&order, &state.recipient_email);
    let (customer_sent, admin_sent) =
        tokio::join!(state.mailer.send(confirmation), state.mailer.send(alert));
    if let Err(e) = customer_sent {
        tracing::error!(error = %e, order_number = %order.order_number, "customer confirmation email failed");
    }
    if let Err(e) = admin_sent {
        tracing::error!(error = %e, order_number = %order.order_number, "admin notification email failed");
    }

    Ok(Json(json!({
        "success": true,
        "message": "Pedido procesado correctamente",
        "orderNumber": order.order_number,
    })))
}
