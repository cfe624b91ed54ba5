//! # Order Totals
//!
//! The one calculation the whole counter workflow hangs off: folding an
//! order's line items into a single amount.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order_total(items) = Σ (quantity_i × unit_price_i), starting from 0   │
//! │                                                                         │
//! │  • empty sequence        → 0                                            │
//! │  • zero-quantity lines   → contribute 0                                 │
//! │  • deterministic, pure   → safe to call from any number of callers     │
//! │  • order-independent     → integer addition commutes and associates    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No input is rejected: sign is not validated (negative quantities silently
//! reduce the total, pending product clarification), and with integer cents
//! there is no NaN/Infinity to worry about.

use crate::money::Money;
use crate::types::LineItem;

/// Sums an order's line items into a single total.
///
/// ## Example
/// ```rust
/// use lava_core::totals::order_total;
/// use lava_core::types::LineItem;
///
/// let items = vec![
///     LineItem::new("Camisa", 2, 500),
///     LineItem::new("Pantalón", 1, 800),
/// ];
/// assert_eq!(order_total(&items).cents(), 1800);
/// ```
pub fn order_total(items: &[LineItem]) -> Money {
    items.iter().map(|item| item.line_total()).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order_is_zero() {
        assert_eq!(order_total(&[]), Money::zero());
    }

    #[test]
    fn test_single_item() {
        let items = vec![LineItem::new("Camisa", 2, 500)];
        assert_eq!(order_total(&items).cents(), 1000);
    }

    #[test]
    fn test_multiple_items() {
        let items = vec![
            LineItem::new("Camisa", 2, 500),
            LineItem::new("Pantalón", 1, 800),
        ];
        assert_eq!(order_total(&items).cents(), 1800);
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let items = vec![
            LineItem::new("Camisa", 0, 500),
            LineItem::new("Pantalón", 1, 800),
        ];
        assert_eq!(order_total(&items).cents(), 800);
    }

    /// Negative quantities are not validated and silently reduce the total.
    /// Documented behavior until product decides whether returns are real.
    #[test]
    fn test_negative_quantity_reduces_total() {
        let items = vec![
            LineItem::new("Camisa", 2, 500),
            LineItem::new("Abono", -1, 300),
        ];
        assert_eq!(order_total(&items).cents(), 700);
    }

    #[test]
    fn test_result_is_order_independent() {
        let mut items = vec![
            LineItem::new("Camisa", 2, 500),
            LineItem::new("Pantalón", 1, 800),
            LineItem::new("Traje", 3, 1250),
        ];
        let forward = order_total(&items);
        items.reverse();
        assert_eq!(order_total(&items), forward);
    }
}
