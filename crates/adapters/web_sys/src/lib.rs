//! # darkmode-adapter-web
//!
//! Browser adapter built on [`web-sys`](https://docs.rs/web-sys) and exported
//! to JavaScript with [`wasm-bindgen`](https://docs.rs/wasm-bindgen).
//!
//! ## Responsibilities
//! - [`LocalStorage`] — `PreferenceStore` over `window.localStorage`
//! - [`RootClassMarker`] — `ThemeMarker` over the `classList` of `<body>`
//!   or `<html>`
//! - [`DomContentLoaded`] — `PageLifecycle` over the `DOMContentLoaded` event
//! - JS entry points: module start installs load-time restoration, and
//!   `toggle_dark_mode()` is called by whatever control the page wires up
//!
//! ```html
//! <script type="module">
//!   import init, { toggle_dark_mode } from "/pkg/darkmode_adapter_web.js";
//!   await init();
//!   document.querySelector("#theme-toggle").onclick = () => toggle_dark_mode();
//! </script>
//! ```
//!
//! ## Dependency rule
//! Depends on `darkmode-app` (port traits) and `darkmode-domain` only.

mod lifecycle;
mod marker;
pub mod settings;
mod storage;

pub use lifecycle::DomContentLoaded;
pub use marker::RootClassMarker;
pub use storage::LocalStorage;

use darkmode_app::services::theme_service::ThemeService;
use darkmode_domain::error::DarkModeError;
use wasm_bindgen::prelude::*;

/// Theme service wired to the current document.
///
/// # Errors
///
/// Returns [`DarkModeError::Validation`] if the page carries invalid settings.
pub fn browser_service() -> Result<ThemeService<LocalStorage, RootClassMarker>, DarkModeError> {
    let settings = settings::from_document()?;
    let marker = RootClassMarker::new(settings.marker_class.clone(), settings.marker_target);
    Ok(ThemeService::new(settings, LocalStorage, marker))
}

pub(crate) fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Module start: set up console logging and restore the saved preference
/// once the page content has loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (module instantiated twice) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(err) = browser_service().and_then(|svc| svc.install(&DomContentLoaded)) {
        tracing::warn!(error = %err, "failed to install theme restoration");
    }
}

/// Flip dark mode and persist the new preference.
///
/// Failures are logged to the console; nothing is thrown to the caller.
#[wasm_bindgen]
pub fn toggle_dark_mode() {
    match browser_service().and_then(|svc| svc.toggle()) {
        Ok(state) => tracing::info!(%state, "dark mode toggled"),
        Err(err) => tracing::warn!(error = %err, "failed to toggle dark mode"),
    }
}

/// Whether the marker is currently on the page root.
#[wasm_bindgen]
#[must_use]
pub fn is_dark_mode() -> bool {
    browser_service()
        .and_then(|svc| svc.current())
        .is_ok_and(darkmode_domain::theme::ThemeState::is_enabled)
}
