//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── Current-user query (four-way outcome)
//! ├── page.rs     ◄─── Page render states (home, order form, ironing)
//! ├── order.rs    ◄─── Order draft manipulation
//! ├── payment.rs  ◄─── Payment-method label table
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const page = await invoke('get_order_page');                           │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn get_order_page(                                               │
//! │      session: State<'_, SessionState>,  ◄── Injected by Tauri          │
//! │      order: State<'_, OrderState>,                                      │
//! │      config: State<'_, ConfigState>,                                    │
//! │  ) -> Result<PageState<OrderFormView>, ApiError>                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { state: "ready", data: {...} }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! async fn get_current_user(session: State<'_, SessionState>)
//!
//! // Only needs the draft
//! fn get_order(order: State<'_, OrderState>)
//!
//! // Needs all three
//! async fn get_order_page(session, order, config)
//! ```

pub mod config;
pub mod order;
pub mod page;
pub mod payment;
pub mod session;
