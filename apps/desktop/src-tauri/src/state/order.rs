//! # Order Draft State
//!
//! Manages the order being entered at the counter.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the draft
//! 2. Only one command should modify it at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Draft Operations                               │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Draft Change          │
//! │  ───────────────          ─────────────           ────────────          │
//! │                                                                         │
//! │  Enter garment ──────────► add_line_item() ─────► items.push(item)      │
//! │                                                                         │
//! │  Change quantity ────────► update_line_item() ──► items[i].qty = n      │
//! │                                                                         │
//! │  Click remove ───────────► remove_line_item() ──► items.remove(i)       │
//! │                                                                         │
//! │  New ticket ─────────────► clear_order() ───────► items.clear()         │
//! │                                                                         │
//! │  Every mutation returns the updated draft with a recomputed total,     │
//! │  so the running total on screen is never stale.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lava_core::totals::order_total;
use lava_core::{CoreError, CoreResult, LineItem, MAX_ITEM_QUANTITY, MAX_ORDER_ITEMS};

/// The order being entered in the current session.
///
/// ## Invariants
/// - Line items are addressed by `id`; `item_name` is display-only and may
///   repeat (two shirts entered separately are two lines)
/// - Quantity 0 in an update removes the line
/// - Maximum items: 100, maximum quantity per line: 999 (lava-core bounds)
///
/// ## Lifecycle
/// Created empty, filled during one order-entry session, cleared for the
/// next customer. Never persisted by this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Line items in entry order
    pub items: Vec<LineItem>,

    /// When the draft was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Creates a new empty draft.
    pub fn new() -> Self {
        OrderDraft {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a line item to the draft.
    ///
    /// Items are *not* merged by name: the name is a display identifier,
    /// not a key. Bounds on draft size and quantity are enforced here;
    /// name/price validation happens at the command layer.
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        if self.items.len() >= MAX_ORDER_ITEMS {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_ITEMS,
            });
        }

        if item.quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: item.quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Updates the quantity of a line item.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line
    /// - Line id not found: returns error
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(item_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        }
    }

    /// Removes a line item by id.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != item_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all line items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of lines in the draft.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity over all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the running total, delegating to the core calculator.
    pub fn total_cents(&self) -> i64 {
        order_total(&self.items).cents()
    }

    /// Checks if the draft is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Draft totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&OrderDraft> for OrderTotals {
    fn from(draft: &OrderDraft) -> Self {
        OrderTotals {
            item_count: draft.item_count(),
            total_quantity: draft.total_quantity(),
            total_cents: draft.total_cents(),
        }
    }
}

/// Tauri-managed order state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<OrderDraft>>`:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one command mutates the draft at a time
///
/// Draft operations are quick and mostly mutating; a `RwLock` would add
/// complexity with minimal benefit.
#[derive(Debug)]
pub struct OrderState {
    draft: Arc<Mutex<OrderDraft>>,
}

impl OrderState {
    /// Creates a new empty order state.
    pub fn new() -> Self {
        OrderState {
            draft: Arc::new(Mutex::new(OrderDraft::new())),
        }
    }

    /// Executes a function with read access to the draft.
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderDraft) -> R,
    {
        let draft = self.draft.lock().expect("Order mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("Order mutex poisoned");
        f(&mut draft)
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_and_totals() {
        let mut draft = OrderDraft::new();
        draft.add_item(LineItem::new("Camisa", 2, 500)).unwrap();
        draft.add_item(LineItem::new("Pantalón", 1, 800)).unwrap();

        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.total_quantity(), 3);
        assert_eq!(draft.total_cents(), 1800);
    }

    #[test]
    fn test_same_name_stays_separate_lines() {
        let mut draft = OrderDraft::new();
        draft.add_item(LineItem::new("Camisa", 1, 500)).unwrap();
        draft.add_item(LineItem::new("Camisa", 1, 500)).unwrap();

        // Names are display identifiers, not keys
        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.total_cents(), 1000);
    }

    #[test]
    fn test_update_quantity() {
        let mut draft = OrderDraft::new();
        let item = LineItem::new("Camisa", 1, 500);
        let id = item.id.clone();
        draft.add_item(item).unwrap();

        draft.update_quantity(&id, 4).unwrap();
        assert_eq!(draft.total_cents(), 2000);

        // Quantity 0 removes the line
        draft.update_quantity(&id, 0).unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_update_unknown_item_fails() {
        let mut draft = OrderDraft::new();
        let err = draft.update_quantity("missing", 2).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
    }

    #[test]
    fn test_remove_item() {
        let mut draft = OrderDraft::new();
        let item = LineItem::new("Camisa", 1, 500);
        let id = item.id.clone();
        draft.add_item(item).unwrap();

        draft.remove_item(&id).unwrap();
        assert!(draft.is_empty());
        assert!(draft.remove_item(&id).is_err());
    }

    #[test]
    fn test_bounds() {
        let mut draft = OrderDraft::new();
        let err = draft
            .add_item(LineItem::new("Camisa", 1000, 500))
            .unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));

        for i in 0..MAX_ORDER_ITEMS {
            draft
                .add_item(LineItem::new(format!("Prenda {i}"), 1, 100))
                .unwrap();
        }
        let err = draft.add_item(LineItem::new("Una más", 1, 100)).unwrap_err();
        assert!(matches!(err, CoreError::OrderTooLarge { .. }));
    }

    #[test]
    fn test_clear() {
        let mut draft = OrderDraft::new();
        draft.add_item(LineItem::new("Camisa", 2, 500)).unwrap();
        assert!(!draft.is_empty());

        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.total_cents(), 0);
    }

    #[test]
    fn test_order_state_wrapper() {
        let state = OrderState::new();
        state.with_order_mut(|d| d.add_item(LineItem::new("Camisa", 2, 500))).unwrap();

        let totals = state.with_order(OrderTotals::from);
        assert_eq!(totals.total_cents, 1000);
    }
}
