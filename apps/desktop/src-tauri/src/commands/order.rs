//! # Order Form Commands
//!
//! Tauri commands for the order-entry workflow.
//!
//! ## Ticket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ticket Lifecycle                                     │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────────┐                  │
//! │  │  Empty   │────►│ Entering │────►│ Handed off to  │                  │
//! │  │  Draft   │     │  Lines   │     │ external layer │                  │
//! │  └──────────┘     └──────────┘     └────────────────┘                  │
//! │                        │                                                │
//! │                   add_line_item                                         │
//! │                   update_line_item                                      │
//! │                   remove_line_item                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_order ──────────► (back to empty)               │
//! │                                                                         │
//! │  Every mutation responds with the full draft + recomputed totals, so   │
//! │  the frontend's running total is always the calculator's output.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{OrderState, OrderTotals};
use lava_core::validation::{validate_item_name, validate_price_cents, validate_quantity};
use lava_core::{CoreError, LineItem};

/// Order response including line items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
}

impl From<&crate::state::OrderDraft> for OrderResponse {
    fn from(draft: &crate::state::OrderDraft) -> Self {
        OrderResponse {
            items: draft.items.clone(),
            totals: OrderTotals::from(draft),
        }
    }
}

/// Gets the current order draft.
#[tauri::command]
pub fn get_order(order: State<'_, OrderState>) -> OrderResponse {
    debug!("get_order command");
    order.with_order(OrderResponse::from)
}

/// Adds a line item to the order.
///
/// ## Behavior
/// - Name, quantity and price are validated at this surface; the total
///   calculator itself never rejects anything
/// - Lines are appended, never merged: item names repeat freely
///
/// ## Arguments
/// * `item_name` - Display name of the garment/service
/// * `quantity` - Quantity (default: 1)
/// * `unit_price_cents` - Unit price in cents
///
/// ## Returns
/// Updated order with all items and the recomputed running total
#[tauri::command]
pub fn add_line_item(
    order: State<'_, OrderState>,
    item_name: String,
    quantity: Option<i64>,
    unit_price_cents: i64,
) -> Result<OrderResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(item_name = %item_name, quantity = %quantity, unit_price_cents = %unit_price_cents, "add_line_item command");

    validate_item_name(&item_name).map_err(CoreError::from)?;
    validate_quantity(quantity).map_err(CoreError::from)?;
    validate_price_cents(unit_price_cents).map_err(CoreError::from)?;

    let item = LineItem::new(item_name.trim(), quantity, unit_price_cents);

    let result = order.with_order_mut(|draft| {
        draft.add_item(item)?;
        Ok::<OrderResponse, CoreError>(OrderResponse::from(&*draft))
    });

    result.map_err(ApiError::from)
}

/// Updates the quantity of a line item.
///
/// ## Behavior
/// - Quantity 0: removes the line
/// - Quantity > max: returns error
///
/// ## Arguments
/// * `item_id` - Line item UUID in the draft
/// * `quantity` - New quantity (0 to remove)
#[tauri::command]
pub fn update_line_item(
    order: State<'_, OrderState>,
    item_id: String,
    quantity: i64,
) -> Result<OrderResponse, ApiError> {
    debug!(item_id = %item_id, quantity = %quantity, "update_line_item command");

    let result = order.with_order_mut(|draft| {
        draft.update_quantity(&item_id, quantity)?;
        Ok::<OrderResponse, CoreError>(OrderResponse::from(&*draft))
    });

    result.map_err(ApiError::from)
}

/// Removes a line item from the order.
///
/// ## Arguments
/// * `item_id` - Line item UUID to remove
#[tauri::command]
pub fn remove_line_item(
    order: State<'_, OrderState>,
    item_id: String,
) -> Result<OrderResponse, ApiError> {
    debug!(item_id = %item_id, "remove_line_item command");

    let result = order.with_order_mut(|draft| {
        draft.remove_item(&item_id)?;
        Ok::<OrderResponse, CoreError>(OrderResponse::from(&*draft))
    });

    result.map_err(ApiError::from)
}

/// Clears all line items from the order.
///
/// ## When Used
/// - User cancels the ticket
/// - Next customer steps up (new entry session)
///
/// ## Returns
/// Empty order
#[tauri::command]
pub fn clear_order(order: State<'_, OrderState>) -> OrderResponse {
    debug!("clear_order command");

    order.with_order_mut(|draft| {
        draft.clear();
        OrderResponse::from(&*draft)
    })
}
