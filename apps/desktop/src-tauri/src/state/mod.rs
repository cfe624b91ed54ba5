//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(session_state);                                     │   │
//! │  │  app.manage(order_state);                                       │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ SessionState │  │  OrderState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  UserGateway │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  + RwLock<   │  │   OrderDraft │  │  time_zone       │              │
//! │  │   UserFetch> │  │  >>          │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: async RwLock, many readers / one refresher            │
//! │  • OrderState: Arc<Mutex<T>> for exclusive draft mutation              │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod order;
mod session;

pub use config::ConfigState;
pub use order::{OrderDraft, OrderState, OrderTotals};
pub use session::{GatewayError, SessionState, StaticUserGateway, UserGateway};
