//! # Page State Model
//!
//! Every authenticated page renders from exactly one of four states, driven
//! by the current-user fetch.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Page Render State Machine                              │
//! │                                                                         │
//! │  current-user query                     page renders                    │
//! │  ──────────────────                     ────────────                    │
//! │                                                                         │
//! │  request in flight ───────────────────► Loading   (spinner)             │
//! │  request failed(msg) ─────────────────► Error     ("Error: {msg}")      │
//! │  succeeded, no user record ───────────► Empty     ("no data" text)      │
//! │  succeeded with user ─────────────────► Ready(V)  (the actual page)     │
//! │                                                                         │
//! │  Priority: loading → error → empty → ready. Exactly ONE branch          │
//! │  renders per cycle - guaranteed structurally, not by if-chains.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tagged union replaces the sequential nullable-field checks of typical
//! data-fetching UI code: a handler must be exhaustive, so mutual exclusivity
//! and priority order cannot drift.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::CurrentUser;

// =============================================================================
// User Fetch Outcome
// =============================================================================

/// The four-way outcome contract of the external current-user query.
///
/// This core performs no retries, no classification, no recovery: it only
/// reacts to the three terminal outcomes plus the pending state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UserFetch {
    /// Request in flight.
    Pending,
    /// Request failed; the message is surfaced verbatim.
    Failed { message: String },
    /// Request succeeded but returned no user record.
    Missing,
    /// Request succeeded with a user record.
    Found { user: CurrentUser },
}

impl UserFetch {
    /// True once the query has settled (any outcome but pending).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, UserFetch::Pending)
    }
}

// =============================================================================
// Page State
// =============================================================================

/// The render state of an authenticated page, carrying view data `V` when
/// ready.
///
/// Serialized adjacently tagged so the frontend switches on `state` and
/// reads the payload from `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
#[ts(export)]
pub enum PageState<V> {
    /// Current-user request in flight; render a loading indicator only.
    Loading,
    /// Current-user request failed; render the carried message.
    Error { message: String },
    /// Request succeeded but no user record exists; distinct from error.
    Empty,
    /// User present; render the authenticated content.
    Ready(V),
}

impl<V> PageState<V> {
    /// Builds a page state from a user-fetch outcome, mapping the user into
    /// the page's view model when (and only when) one is present.
    ///
    /// The fixed priority order loading → error → empty → ready is the
    /// match order below; there is no other path into `Ready`.
    pub fn from_fetch(fetch: UserFetch, view: impl FnOnce(CurrentUser) -> V) -> Self {
        match fetch {
            UserFetch::Pending => PageState::Loading,
            UserFetch::Failed { message } => PageState::Error { message },
            UserFetch::Missing => PageState::Empty,
            UserFetch::Found { user } => PageState::Ready(view(user)),
        }
    }

    /// Maps the ready payload, leaving the other states untouched.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> PageState<U> {
        match self {
            PageState::Loading => PageState::Loading,
            PageState::Error { message } => PageState::Error { message },
            PageState::Empty => PageState::Empty,
            PageState::Ready(v) => PageState::Ready(f(v)),
        }
    }

    /// Status line for the three non-ready states, `None` when the page
    /// should render its actual content.
    ///
    /// The error message is passed through verbatim.
    pub fn status_text(&self) -> Option<String> {
        match self {
            PageState::Loading => Some("Cargando...".to_string()),
            PageState::Error { message } => Some(format!("Error: {message}")),
            PageState::Empty => Some("Sin datos".to_string()),
            PageState::Ready(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            name: "Lucía".to_string(),
            email: "lucia@example.com".to_string(),
        }
    }

    #[test]
    fn test_pending_renders_loading_only() {
        let page = PageState::from_fetch(UserFetch::Pending, |u| u.name);
        assert!(page.is_loading());
        assert!(!page.is_ready());
        assert_eq!(page.status_text().unwrap(), "Cargando...");
    }

    #[test]
    fn test_failure_message_passes_through_verbatim() {
        let fetch = UserFetch::Failed {
            message: "Network error".to_string(),
        };
        let page = PageState::from_fetch(fetch, |u| u.name);

        assert_eq!(page.status_text().unwrap(), "Error: Network error");
        assert!(matches!(page, PageState::Error { .. }));
    }

    #[test]
    fn test_missing_user_is_empty_not_error() {
        let page = PageState::from_fetch(UserFetch::Missing, |u| u.name);
        assert_eq!(page, PageState::Empty);
        assert_eq!(page.status_text().unwrap(), "Sin datos");
    }

    #[test]
    fn test_found_user_renders_ready_content() {
        let page = PageState::from_fetch(UserFetch::Found { user: user() }, |u| u.name);
        assert_eq!(page, PageState::Ready("Lucía".to_string()));
        assert!(page.status_text().is_none());
    }

    #[test]
    fn test_map_only_touches_ready() {
        let err: PageState<i64> = PageState::Error {
            message: "boom".to_string(),
        };
        assert_eq!(
            err.map(|n| n * 2),
            PageState::Error {
                message: "boom".to_string()
            }
        );

        let ready = PageState::Ready(21);
        assert_eq!(ready.map(|n| n * 2), PageState::Ready(42));
    }

    #[test]
    fn test_serialization_tags() {
        let page: PageState<String> = PageState::Loading;
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"state":"loading"}"#
        );

        let page: PageState<String> = PageState::Error {
            message: "Network error".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"state":"error","data":{"message":"Network error"}}"#
        );

        let page = PageState::Ready("ok".to_string());
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"state":"ready","data":"ok"}"#
        );
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(!UserFetch::Pending.is_terminal());
        assert!(UserFetch::Missing.is_terminal());
        assert!(UserFetch::Found { user: user() }.is_terminal());
        assert!(UserFetch::Failed {
            message: "x".to_string()
        }
        .is_terminal());
    }
}
