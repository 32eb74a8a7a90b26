//! # darkmode-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — key-value persistence surviving page reloads
//!   - `ThemeMarker` — the class flag on the page root
//!   - `PageLifecycle` — one-shot "content loaded" notification
//! - Define the **driving/inbound** use-case struct:
//!   - `ThemeService` — toggle, restore on load, read current state
//!
//! ## Dependency rule
//! Depends on `darkmode-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
