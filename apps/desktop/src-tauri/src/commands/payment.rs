//! # Payment Method Commands
//!
//! Exposes the payment-method label table to the frontend.
//!
//! The table is consulted purely for display: actual charging/settlement is
//! outside this application. Totality is guaranteed in lava-core (exhaustive
//! `match`, no default arm), so this command cannot observe an unlabeled
//! method.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lava_core::OrderPaymentMethod;

/// One tender button: the machine tag plus its Spanish display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDto {
    pub method: OrderPaymentMethod,
    pub label: String,
}

/// Returns every payment method with its display label, in display order.
///
/// ## Example Response
/// ```json
/// [
///   { "method": "cash", "label": "Efectivo" },
///   { "method": "card", "label": "Tarjeta" },
///   { "method": "transfer", "label": "Transferencia" }
/// ]
/// ```
#[tauri::command]
pub fn get_payment_methods() -> Vec<PaymentMethodDto> {
    debug!("get_payment_methods command");

    OrderPaymentMethod::ALL
        .iter()
        .map(|method| PaymentMethodDto {
            method: *method,
            label: method.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_method_appears_once_with_label() {
        let methods = get_payment_methods();
        assert_eq!(methods.len(), 3);

        assert_eq!(methods[0].method, OrderPaymentMethod::Cash);
        assert_eq!(methods[0].label, "Efectivo");
        assert_eq!(methods[1].method, OrderPaymentMethod::Card);
        assert_eq!(methods[1].label, "Tarjeta");
        assert_eq!(methods[2].method, OrderPaymentMethod::Transfer);
        assert_eq!(methods[2].label, "Transferencia");
    }
}
