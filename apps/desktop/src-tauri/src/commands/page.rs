//! # Page Commands
//!
//! One command per authenticated page, each returning `PageState<V>` for its
//! view model.
//!
//! ## Render Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Page Command Flow                                    │
//! │                                                                         │
//! │  invoke('get_order_page')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SessionState.snapshot() ──► UserFetch                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  PageState::from_fetch(fetch, view)                                     │
//! │         │                                                               │
//! │         ├── pending ──────────► { state: "loading" }                    │
//! │         ├── failed(msg) ──────► { state: "error", data: { message } }   │
//! │         ├── missing ──────────► { state: "empty" }                      │
//! │         └── found(user) ──────► { state: "ready", data: <view> }        │
//! │                                                                         │
//! │  The frontend switches on `state`; exhaustiveness is enforced on the   │
//! │  Rust side, priority order is the single match in lava-core.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::commands::payment::PaymentMethodDto;
use crate::error::ApiError;
use crate::state::{ConfigState, OrderState, OrderTotals, SessionState};
use lava_core::dates::{start_of_day_in, today_in};
use lava_core::{CurrentUser, LineItem, PageState};

// =============================================================================
// View Models
// =============================================================================

/// The authenticated home page: greeting, store header, tender buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub user: CurrentUser,
    pub store_name: String,
    /// Current calendar date in the store zone (ISO 8601 date).
    pub today: String,
    pub payment_methods: Vec<PaymentMethodDto>,
}

/// The order form: current draft plus its running total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormView {
    pub user: CurrentUser,
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
    /// Running total formatted with the store currency ("18.00 €").
    pub formatted_total: String,
}

/// The ironing workspace: the business-day boundary plus the lines to work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IroningView {
    pub user: CurrentUser,
    /// Current business date in the store zone (ISO 8601 date).
    pub business_date: String,
    /// Start of that day in the store zone (RFC 3339), the lower bound any
    /// day-scoped filtering hangs off.
    pub day_start: String,
    pub items: Vec<LineItem>,
}

// =============================================================================
// View Builders
// =============================================================================
// Pure given their inputs, so the page content is testable without Tauri.

fn home_view(user: CurrentUser, config: &ConfigState, tz: Tz) -> HomeView {
    HomeView {
        user,
        store_name: config.store_name.clone(),
        today: today_in(tz).to_string(),
        payment_methods: crate::commands::payment::get_payment_methods(),
    }
}

fn order_form_view(
    user: CurrentUser,
    items: Vec<LineItem>,
    totals: OrderTotals,
    config: &ConfigState,
) -> OrderFormView {
    let formatted_total = config.format_currency(totals.total_cents);
    OrderFormView {
        user,
        items,
        totals,
        formatted_total,
    }
}

fn ironing_view(user: CurrentUser, items: Vec<LineItem>, tz: Tz) -> IroningView {
    let day_start = start_of_day_in(tz);
    IroningView {
        user,
        business_date: day_start.date_naive().to_string(),
        day_start: day_start.to_rfc3339(),
        items,
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Renders the authenticated home page.
#[tauri::command]
pub async fn get_home_page(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> Result<PageState<HomeView>, ApiError> {
    debug!("get_home_page command");

    let tz = config.zone()?;
    let fetch = session.snapshot().await;
    Ok(PageState::from_fetch(fetch, |user| {
        home_view(user, config.inner(), tz)
    }))
}

/// Renders the order form with the current draft and running total.
#[tauri::command]
pub async fn get_order_page(
    session: State<'_, SessionState>,
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
) -> Result<PageState<OrderFormView>, ApiError> {
    debug!("get_order_page command");

    let fetch = session.snapshot().await;
    let (items, totals) = order.with_order(|draft| (draft.items.clone(), OrderTotals::from(draft)));
    Ok(PageState::from_fetch(fetch, |user| {
        order_form_view(user, items, totals, config.inner())
    }))
}

/// Renders the ironing workspace for the current business day.
#[tauri::command]
pub async fn get_ironing_page(
    session: State<'_, SessionState>,
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
) -> Result<PageState<IroningView>, ApiError> {
    debug!("get_ironing_page command");

    let tz = config.zone()?;
    let fetch = session.snapshot().await;
    let items = order.with_order(|draft| draft.items.clone());
    Ok(PageState::from_fetch(fetch, |user| {
        ironing_view(user, items, tz)
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OrderDraft;
    use lava_core::UserFetch;

    fn user() -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            name: "Lucía".to_string(),
            email: "lucia@example.com".to_string(),
        }
    }

    fn madrid() -> Tz {
        "Europe/Madrid".parse().unwrap()
    }

    #[test]
    fn test_home_view_contents() {
        let config = ConfigState::default();
        let view = home_view(user(), &config, madrid());

        assert_eq!(view.user.name, "Lucía");
        assert_eq!(view.store_name, "Lavandería Central");
        assert_eq!(view.payment_methods.len(), 3);
        assert_eq!(view.payment_methods[0].label, "Efectivo");
        // ISO date, e.g. "2026-08-23"
        assert_eq!(view.today.len(), 10);
    }

    #[test]
    fn test_order_form_view_formats_running_total() {
        let config = ConfigState::default();
        let mut draft = OrderDraft::new();
        draft.add_item(LineItem::new("Camisa", 2, 500)).unwrap();
        draft.add_item(LineItem::new("Pantalón", 1, 800)).unwrap();

        let view = order_form_view(
            user(),
            draft.items.clone(),
            OrderTotals::from(&draft),
            &config,
        );

        assert_eq!(view.totals.total_cents, 1800);
        assert_eq!(view.formatted_total, "18.00 €");
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_ironing_view_day_boundary() {
        let view = ironing_view(user(), Vec::new(), madrid());

        // day_start is midnight of business_date in the store zone
        assert!(view.day_start.starts_with(&view.business_date));
        assert!(view.day_start.contains("T00:00:00"));
    }

    #[test]
    fn test_page_states_from_fetch_outcomes() {
        let config = ConfigState::default();
        let tz = madrid();

        let page = PageState::from_fetch(UserFetch::Pending, |u| home_view(u, &config, tz));
        assert!(page.is_loading());

        let page = PageState::from_fetch(
            UserFetch::Failed {
                message: "Network error".to_string(),
            },
            |u| home_view(u, &config, tz),
        );
        assert_eq!(page.status_text().unwrap(), "Error: Network error");

        let page = PageState::from_fetch(UserFetch::Missing, |u| home_view(u, &config, tz));
        assert!(matches!(page, PageState::Empty));

        let page = PageState::from_fetch(UserFetch::Found { user: user() }, |u| {
            home_view(u, &config, tz)
        });
        assert!(page.is_ready());
    }
}
