//! # Session State
//!
//! Holds the latest observed outcome of the current-user query.
//!
//! ## The Gateway Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Current-User Fetch                                   │
//! │                                                                         │
//! │  Page command ──► SessionState.snapshot() ──► UserFetch                 │
//! │                        ▲                                                │
//! │                        │ refresh()                                      │
//! │                        │                                                │
//! │              ┌─────────┴──────────┐                                     │
//! │              │  dyn UserGateway   │  ◄── external auth collaborator    │
//! │              └────────────────────┘                                     │
//! │                        │                                                │
//! │        Ok(Some(user)) ─┼─► Found      Ok(None) ──► Missing              │
//! │        Err(e) ─────────┴─► Failed (message passed through verbatim)     │
//! │                                                                         │
//! │  The state starts as Pending, so the first render of every             │
//! │  authenticated page is the loading state.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retry, cancellation and timeout semantics belong to the gateway
//! implementation; this state only records terminal outcomes.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use lava_core::{CurrentUser, UserFetch};

/// Failure reported by the current-user collaborator.
///
/// The message is all this core ever looks at: it is surfaced verbatim as
/// the page's error state, with no classification or recovery.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct GatewayError(pub String);

/// The external capability that resolves the authenticated session to a
/// user record.
///
/// `Ok(None)` is a *successful* query with no user record - it renders the
/// empty state, not the error state.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn current_user(&self) -> Result<Option<CurrentUser>, GatewayError>;
}

/// Tauri-managed session state.
///
/// ## Thread Safety
/// The snapshot sits behind a `tokio::sync::RwLock`: page commands read it
/// concurrently, only `refresh` writes.
pub struct SessionState {
    gateway: Arc<dyn UserGateway>,
    last: RwLock<UserFetch>,
}

impl SessionState {
    /// Creates session state over a gateway. Starts in `Pending`.
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        SessionState {
            gateway,
            last: RwLock::new(UserFetch::Pending),
        }
    }

    /// Returns the last observed fetch outcome.
    pub async fn snapshot(&self) -> UserFetch {
        self.last.read().await.clone()
    }

    /// Drives one current-user fetch and records its terminal outcome.
    ///
    /// The snapshot is reset to `Pending` for the duration of the request,
    /// so concurrent page reads render the loading state while the query is
    /// in flight.
    pub async fn refresh(&self) -> UserFetch {
        {
            let mut last = self.last.write().await;
            *last = UserFetch::Pending;
        }

        let outcome = match self.gateway.current_user().await {
            Ok(Some(user)) => {
                debug!(user_id = %user.id, "current-user query resolved");
                UserFetch::Found { user }
            }
            Ok(None) => {
                debug!("current-user query returned no record");
                UserFetch::Missing
            }
            Err(e) => {
                warn!(error = %e, "current-user query failed");
                UserFetch::Failed {
                    message: e.to_string(),
                }
            }
        };

        let mut last = self.last.write().await;
        *last = outcome.clone();
        outcome
    }
}

// =============================================================================
// Development Gateway
// =============================================================================

/// A gateway that resolves to a fixed user, standing in for the real auth
/// collaborator in development.
///
/// ## Environment Variables
/// - `LAVA_USER_ID`, `LAVA_USER_NAME`, `LAVA_USER_EMAIL`: the dev user
/// - unset name → the query resolves successfully with no record (empty
///   state), which is useful for exercising the page states by hand
pub struct StaticUserGateway {
    user: Option<CurrentUser>,
}

impl StaticUserGateway {
    pub fn new(user: Option<CurrentUser>) -> Self {
        StaticUserGateway { user }
    }

    /// Builds the dev gateway from `LAVA_USER_*` environment variables.
    pub fn from_env() -> Self {
        let user = std::env::var("LAVA_USER_NAME").ok().map(|name| CurrentUser {
            id: std::env::var("LAVA_USER_ID").unwrap_or_else(|_| "dev-user".to_string()),
            name,
            email: std::env::var("LAVA_USER_EMAIL")
                .unwrap_or_else(|_| "dev@lava.local".to_string()),
        });
        StaticUserGateway { user }
    }
}

#[async_trait]
impl UserGateway for StaticUserGateway {
    async fn current_user(&self) -> Result<Option<CurrentUser>, GatewayError> {
        Ok(self.user.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingGateway;

    #[async_trait]
    impl UserGateway for FailingGateway {
        async fn current_user(&self) -> Result<Option<CurrentUser>, GatewayError> {
            Err(GatewayError("Network error".to_string()))
        }
    }

    fn user() -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            name: "Lucía".to_string(),
            email: "lucia@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_starts_pending() {
        let state = SessionState::new(Arc::new(StaticUserGateway::new(Some(user()))));
        assert_eq!(state.snapshot().await, UserFetch::Pending);
    }

    #[tokio::test]
    async fn test_refresh_records_found_user() {
        let state = SessionState::new(Arc::new(StaticUserGateway::new(Some(user()))));

        let outcome = state.refresh().await;
        assert_eq!(outcome, UserFetch::Found { user: user() });
        assert_eq!(state.snapshot().await, outcome);
    }

    #[tokio::test]
    async fn test_refresh_records_missing_user() {
        let state = SessionState::new(Arc::new(StaticUserGateway::new(None)));

        assert_eq!(state.refresh().await, UserFetch::Missing);
    }

    #[tokio::test]
    async fn test_refresh_passes_failure_message_through() {
        let state = SessionState::new(Arc::new(FailingGateway));

        let outcome = state.refresh().await;
        assert_eq!(
            outcome,
            UserFetch::Failed {
                message: "Network error".to_string()
            }
        );
    }
}
