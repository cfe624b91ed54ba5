//! # Session Commands
//!
//! The current-user query, surfaced to the frontend as its four-way outcome.
//!
//! Note: a failed fetch is a *successful* command carrying the `failed`
//! outcome - the pages turn it into their error state. `ApiError` here only
//! covers IPC-level problems.

use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;
use lava_core::UserFetch;

/// Returns the last observed outcome of the current-user query.
///
/// The first call after startup observes `pending` until `refresh_session`
/// has settled, which is exactly what the loading state renders from.
#[tauri::command]
pub async fn get_current_user(session: State<'_, SessionState>) -> Result<UserFetch, ApiError> {
    debug!("get_current_user command");
    Ok(session.snapshot().await)
}

/// Drives one current-user fetch and returns its terminal outcome.
///
/// Called once on frontend startup and again on explicit re-login. Retry
/// policy, if any, belongs to the frontend's data-fetching layer.
#[tauri::command]
pub async fn refresh_session(session: State<'_, SessionState>) -> Result<UserFetch, ApiError> {
    debug!("refresh_session command");
    Ok(session.refresh().await)
}
