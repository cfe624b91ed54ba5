//! # Configuration Commands

use tauri::State;
use tracing::debug;

use crate::state::ConfigState;

/// Returns the application configuration.
///
/// The frontend uses this for the store header and currency formatting.
#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    debug!("get_config command");
    config.inner().clone()
}
