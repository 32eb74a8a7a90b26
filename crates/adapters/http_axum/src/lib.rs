//! # darkmode-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **demo page** whose button calls the wasm-exported
//!   `toggle_dark_mode()`, with the storage key and marker class rendered as
//!   `data-*` attributes on `<html>`
//! - Serve the **wasm bundle** (`wasm-bindgen` output) from a directory
//! - Expose the active theme settings as JSON
//!
//! The preference itself never reaches the server: it lives in the
//! browser's `localStorage`.
//!
//! ## Dependency rule
//! Depends on `darkmode-domain` for the settings type. Never leaks axum
//! types into the domain.

pub mod api;
pub mod page;
pub mod router;
pub mod state;
