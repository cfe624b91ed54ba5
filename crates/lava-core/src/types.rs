//! # Domain Types
//!
//! Core domain types used throughout Lava POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    LineItem     │   │  OrderPaymentMethod  │   │  CurrentUser    │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  id (UUID)      │   │  Cash  → "Efectivo"  │   │  id             │  │
//! │  │  item_name      │   │  Card  → "Tarjeta"   │   │  name           │  │
//! │  │  quantity       │   │  Transfer            │   │  email          │  │
//! │  │  unit_price     │   │     → "Transferencia"│   │                 │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Line items are transient: constructed during a single order-entry session
//! and discarded with the draft. Nothing in this crate persists them. The
//! payment label table is static and process-wide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// A single priced, quantified entry in an order.
///
/// ## Identity
/// `item_name` is a display identifier, **not** unique: two shirts entered
/// separately are two distinct lines. `id` exists so the frontend can address
/// a specific line for edits/removal without relying on the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Unique identifier for this line (UUID v4).
    pub id: String,

    /// Display name of the garment/service ("Camisa", "Traje", ...).
    pub item_name: String,

    /// Quantity of this item.
    ///
    /// Negative quantities are not rejected here: whether returns/discounts
    /// are a real business case is an open product question, and the total
    /// calculator deliberately lets them flow through arithmetic.
    pub quantity: i64,

    /// Unit price in cents (smallest currency unit).
    pub unit_price_cents: i64,

    /// When this line was added to the order.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item with a fresh id.
    pub fn new(item_name: impl Into<String>, quantity: i64, unit_price_cents: i64) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            item_name: item_name.into(),
            quantity,
            unit_price_cents,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Line total in cents, for DTOs.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.line_total().cents()
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// The payment channels accepted at the counter.
///
/// ## Closed Enumeration
/// This set is closed: every variant must resolve to a display label via
/// [`OrderPaymentMethod::label`]. The mapping is an exhaustive `match` with
/// no default arm, so adding a variant without a label fails to **build**
/// instead of failing at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderPaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Bank transfer.
    Transfer,
}

impl OrderPaymentMethod {
    /// Every payment method, in display order.
    ///
    /// Used to render tender buttons and to assert table totality in tests.
    pub const ALL: [OrderPaymentMethod; 3] = [
        OrderPaymentMethod::Cash,
        OrderPaymentMethod::Card,
        OrderPaymentMethod::Transfer,
    ];

    /// Returns the Spanish display label for this payment method.
    ///
    /// Lookup is O(1) and total - there is no "unknown method" case
    /// representable once the enumeration is closed.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderPaymentMethod::Cash => "Efectivo",
            OrderPaymentMethod::Card => "Tarjeta",
            OrderPaymentMethod::Transfer => "Transferencia",
        }
    }
}

// =============================================================================
// Current User
// =============================================================================

/// The authenticated user record returned by the external current-user query.
///
/// Authentication and session handling live entirely in an external
/// collaborator; this core only carries the fields the pages display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_total() {
        let item = LineItem::new("Camisa", 2, 500);
        assert_eq!(item.line_total_cents(), 1000);
    }

    #[test]
    fn test_line_item_zero_quantity() {
        let item = LineItem::new("Camisa", 0, 500);
        assert_eq!(item.line_total_cents(), 0);
    }

    #[test]
    fn test_line_items_have_distinct_ids() {
        let a = LineItem::new("Camisa", 1, 500);
        let b = LineItem::new("Camisa", 1, 500);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(OrderPaymentMethod::Cash.label(), "Efectivo");
        assert_eq!(OrderPaymentMethod::Card.label(), "Tarjeta");
        assert_eq!(OrderPaymentMethod::Transfer.label(), "Transferencia");
    }

    /// The table keys must equal the enumeration values exactly: no missing,
    /// no extra, every label non-empty.
    #[test]
    fn test_payment_method_table_is_total() {
        assert_eq!(OrderPaymentMethod::ALL.len(), 3);
        for method in OrderPaymentMethod::ALL {
            assert!(!method.label().is_empty());
        }

        // Distinct labels per variant
        let labels: std::collections::HashSet<&str> =
            OrderPaymentMethod::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels.len(), OrderPaymentMethod::ALL.len());
    }

    #[test]
    fn test_payment_method_serde_tags() {
        let json = serde_json::to_string(&OrderPaymentMethod::Transfer).unwrap();
        assert_eq!(json, "\"transfer\"");

        let back: OrderPaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(back, OrderPaymentMethod::Cash);
    }
}
