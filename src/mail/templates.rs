//! Transactional email bodies, kept close to the shop's product copy.

use rust_decimal::Decimal;

use super::OutboundEmail;
use crate::domain::contact::ContactMessage;
use crate::domain::order::OrderData;

pub const STORE_NAME: &str = "Escaparate";

fn eur(amount: Decimal) -> String {
    format!("€{:.2}", amount)
}

/// Confirmation sent to the customer: pending-payment status, line items
/// with images, and the Bizum transfer concept to use.
pub fn customer_confirmation(order: &OrderData) -> OutboundEmail {
    let items_html: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<tr style="border-bottom: 1px solid #eee;">
  <td style="padding: 12px 8px;"><img src="{image}" alt="{name}" style="width: 50px; height: 50px; object-fit: cover; border-radius: 4px;"></td>
  <td style="padding: 12px 8px; font-weight: 500;">{name}</td>
  <td style="padding: 12px 8px; text-align: center;">{quantity}</td>
  <td style="padding: 12px 8px; text-align: right;">{price}</td>
  <td style="padding: 12px 8px; text-align: right; font-weight: 600;">{subtotal}</td>
</tr>"#,
                image = item.image,
                name = item.name,
                quantity = item.quantity,
                price = eur(item.price),
                subtotal = eur(item.line_total()),
            )
        })
        .collect();

    let phone_html = if order.customer_info.phone.is_empty() {
        String::new()
    } else {
        format!(
            "<p><strong>Teléfono:</strong> {}</p>",
            order.customer_info.phone
        )
    };

    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background-color: #2563eb; color: white; padding: 20px; text-align: center; border-radius: 8px 8px 0 0; }}
    .content {{ background-color: #f8f9fa; padding: 20px; }}
    .order-details {{ background-color: white; padding: 20px; border-radius: 8px; margin: 20px 0; }}
    .table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
    .total-row {{ background-color: #f1f5f9; font-weight: bold; }}
    .footer {{ text-align: center; padding: 20px; font-size: 14px; color: #666; }}
    .status {{ background-color: #fef3c7; color: #92400e; padding: 12px; border-radius: 8px; margin: 20px 0; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>🛍️ ¡Gracias por tu pedido!</h1>
      <h2>Pedido #{order_number}</h2>
    </div>
    <div class="content">
      <div class="status">
        <strong>📋 Estado:</strong> Pendiente de confirmación de pago<br>
        <small>Verificaremos tu pago por Bizum y te confirmaremos en breve.</small>
      </div>
      <div class="order-details">
        <h3>👤 Información del Cliente</h3>
        <p><strong>Nombre:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        {phone_html}
      </div>
      <div class="order-details">
        <h3>📦 Resumen del Pedido</h3>
        <table class="table">
          <thead>
            <tr style="background-color: #f1f5f9;">
              <th style="padding: 12px 8px; text-align: left;">Imagen</th>
              <th style="padding: 12px 8px; text-align: left;">Producto</th>
              <th style="padding: 12px 8px; text-align: center;">Cantidad</th>
              <th style="padding: 12px 8px; text-align: right;">Precio Unit.</th>
              <th style="padding: 12px 8px; text-align: right;">Subtotal</th>
            </tr>
          </thead>
          <tbody>
            {items_html}
            <tr class="total-row">
              <td colspan="4" style="padding: 16px 8px; text-align: right;"><strong>TOTAL:</strong></td>
              <td style="padding: 16px 8px; text-align: right; font-size: 18px;"><strong>{total}</strong></td>
            </tr>
          </tbody>
        </table>
      </div>
      <div class="order-details">
        <h3>💳 Información de Pago</h3>
        <p><strong>Método:</strong> Bizum</p>
        <p><strong>Número Bizum:</strong> {bizum_phone}</p>
        <p><strong>Concepto indicado:</strong> {order_number} - {name}</p>
      </div>
    </div>
    <div class="footer">
      <p>📞 Te contactaremos pronto para confirmar tu pedido.</p>
      <p>📧 Si tienes alguna duda, responde a este email.</p>
      <p><small>{store} - Tu tienda de confianza</small></p>
    </div>
  </div>
</body>
</html>"#,
        order_number = order.order_number,
        name = order.customer_info.name,
        email = order.customer_info.email,
        phone_html = phone_html,
        items_html = items_html,
        total = eur(order.total),
        bizum_phone = order.bizum_phone,
        store = STORE_NAME,
    );

    OutboundEmail {
        to: order.customer_info.email.clone(),
        reply_to: None,
        subject: format!(
            "Confirmación de Pedido #{} - {}",
            order.order_number, STORE_NAME
        ),
        html_body,
    }
}

/// Alert for the shop owner: verify the Bizum transfer and confirm the
/// order by hand.
pub fn admin_notification(order: &OrderData, recipient: &str) -> OutboundEmail {
    let items_text: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "• {} - Cantidad: {} - {} c/u = {}",
                item.name,
                item.quantity,
                eur(item.price),
                eur(item.line_total()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let phone_html = if order.customer_info.phone.is_empty() {
        "<p>Teléfono: No proporcionado</p>".to_string()
    } else {
        format!(
            "<p><strong>Teléfono:</strong> {}</p>",
            order.customer_info.phone
        )
    };

    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background-color: #dc2626; color: white; padding: 20px; text-align: center; border-radius: 8px 8px 0 0; }}
    .alert {{ background-color: #fecaca; color: #991b1b; padding: 15px; border-radius: 8px; margin: 20px 0; border-left: 4px solid #dc2626; }}
    .section {{ background-color: white; padding: 20px; margin: 10px 0; border-radius: 8px; border: 1px solid #e5e7eb; }}
    .customer-info {{ background-color: #f0f9ff; border-left: 4px solid #0284c7; }}
    .order-info {{ background-color: #f0fdf4; border-left: 4px solid #16a34a; }}
    .payment-info {{ background-color: #fefce8; border-left: 4px solid #ca8a04; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>🛒 NUEVO PEDIDO RECIBIDO</h1>
      <h2>Pedido #{order_number}</h2>
    </div>
    <div class="alert">
      <strong>⚠️ ACCIÓN REQUERIDA:</strong> Verificar pago por Bizum y confirmar pedido
    </div>
    <div class="section customer-info">
      <h3>👤 Información del Cliente</h3>
      <p><strong>Nombre:</strong> {name}</p>
      <p><strong>Email:</strong> {email}</p>
      {phone_html}
    </div>
    <div class="section order-info">
      <h3>📦 Productos Pedidos</h3>
      <pre style="background-color: #f9fafb; padding: 15px; border-radius: 4px; font-family: monospace;">{items_text}</pre>
      <p style="font-size: 18px; font-weight: bold; text-align: right; margin-top: 15px; color: #16a34a;">TOTAL: {total}</p>
    </div>
    <div class="section payment-info">
      <h3>💳 Información de Pago</h3>
      <p><strong>Método:</strong> Bizum</p>
      <p><strong>Número Bizum del cliente:</strong> {bizum_phone}</p>
      <p><strong>Concepto que debería aparecer:</strong> <code>{order_number} - {name}</code></p>
    </div>
    <div class="section">
      <h3>📝 Próximos Pasos</h3>
      <ol>
        <li>Verificar el pago en Bizum ({total})</li>
        <li>Confirmar disponibilidad de productos</li>
        <li>Contactar al cliente para coordinar entrega</li>
        <li>Actualizar estado del pedido</li>
      </ol>
    </div>
  </div>
</body>
</html>"#,
        order_number = order.order_number,
        name = order.customer_info.name,
        email = order.customer_info.email,
        phone_html = phone_html,
        items_text = items_text,
        total = eur(order.total),
        bizum_phone = order.bizum_phone,
    );

    OutboundEmail {
        to: recipient.to_string(),
        reply_to: None,
        subject: format!(
            "🛒 NUEVO PEDIDO #{} - {}",
            order.order_number,
            eur(order.total)
        ),
        html_body,
    }
}

/// Contact form forwarded to the shop inbox, visitor address as reply-to.
pub fn contact_notification(message: &ContactMessage, recipient: &str) -> OutboundEmail {
    let html_body = format!(
        r#"<h3>Nuevo mensaje de contacto</h3>
<p><strong>Nombre:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Asunto:</strong> {subject}</p>
<p><strong>Mensaje:</strong> {body}</p>"#,
        name = message.name,
        email = message.email,
        subject = message.subject,
        body = message.message,
    );

    OutboundEmail {
        to: recipient.to_string(),
        reply_to: Some(message.email.clone()),
        subject: format!("Contacto: {}", message.subject),
        html_body,
    }
}
