//! Shared application state for axum handlers.

use std::sync::Arc;

use darkmode_domain::settings::ThemeSettings;

/// Application state shared across all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Names rendered into the page and exposed by the API.
    pub settings: Arc<ThemeSettings>,
    /// URL prefix the wasm bundle is mounted under.
    pub bundle_path: Arc<str>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(settings: ThemeSettings, bundle_path: impl Into<Arc<str>>) -> Self {
        Self {
            settings: Arc::new(settings),
            bundle_path: bundle_path.into(),
        }
    }
}
