//! # Lava Desktop Library
//!
//! Core library for the Lava POS desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! lava_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Current-user fetch state + gateway seam
//! │   ├── order.rs    ◄─── Order draft state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Current-user commands
//! │   ├── page.rs     ◄─── Page render commands
//! │   ├── order.rs    ◄─── Order draft commands
//! │   ├── payment.rs  ◄─── Payment label table
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, OrderState, SessionState, StaticUserGateway};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults + LAVA_* environment overrides                           │
/// │     • Store time zone validated up front (fail fast on a typo)          │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: user gateway + Pending snapshot                     │
/// │     • OrderState: empty draft with Mutex for thread-safe updates        │
/// │     • ConfigState: read-only configuration                              │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Lava POS Desktop Application");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let config_state = ConfigState::from_env();

            // Validate the store zone now rather than on first page render
            let tz = config_state.zone()?;
            info!(%tz, store = %config_state.store_name, "Configuration loaded");

            // The real auth collaborator plugs in behind this seam; the
            // static gateway stands in for development builds.
            let gateway = Arc::new(StaticUserGateway::from_env());
            let session_state = SessionState::new(gateway);
            let order_state = OrderState::new();

            // Register state with Tauri
            app.manage(session_state);
            app.manage(order_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Session commands
            commands::session::get_current_user,
            commands::session::refresh_session,
            // Page commands
            commands::page::get_home_page,
            commands::page::get_order_page,
            commands::page::get_ironing_page,
            // Order commands
            commands::order::get_order,
            commands::order::add_line_item,
            commands::order::update_line_item,
            commands::order::remove_line_item,
            commands::order::clear_order,
            // Payment commands
            commands::payment::get_payment_methods,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=lava=trace` - Show trace for lava crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,lava=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
