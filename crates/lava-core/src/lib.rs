//! # lava-core: Pure Business Logic for Lava POS
//!
//! This crate is the **heart** of Lava POS, a point-of-sale front-end for a
//! dry-cleaning/laundry business. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lava POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Frontend (WebView)                       │   │
//! │  │    Home Page ──► Order Form ──► Ironing Workspace               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    get_current_user, add_line_item, get_order_page, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ lava-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │   page    │  │   │
//! │  │   │ LineItem  │  │   Money   │  │ order sum │  │ PageState │  │   │
//! │  │   │ PayMethod │  │  (cents)  │  │           │  │ UserFetch │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, OrderPaymentMethod, CurrentUser)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`totals`] - Order total calculation
//! - [`dates`] - Start-of-day boundaries in the store time zone
//! - [`page`] - Four-state page model (loading/error/empty/ready)
//! - [`error`] - Domain error types
//! - [`validation`] - Input surface validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lava_core::totals::order_total;
//! use lava_core::types::LineItem;
//!
//! // Two shirts at 5.00 each, one pair of pants at 8.00
//! let items = vec![
//!     LineItem::new("Camisa", 2, 500),
//!     LineItem::new("Pantalón", 1, 800),
//! ];
//!
//! assert_eq!(order_total(&items).cents(), 1800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dates;
pub mod error;
pub mod money;
pub mod page;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lava_core::Money` instead of
// `use lava_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use page::{PageState, UserFetch};
pub use totals::order_total;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single order draft
///
/// ## Business Reason
/// Prevents runaway orders and ensures reasonable ticket sizes.
/// Can be made configurable per-store in future versions.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
/// Configurable per-store in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
