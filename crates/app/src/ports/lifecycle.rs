//! Page lifecycle port — one-shot notification when the page structure has
//! finished loading.

use darkmode_domain::error::DarkModeError;

/// Callback run once when the page content has loaded.
pub type LoadCallback = Box<dyn FnOnce() + 'static>;

/// Source of the "content loaded" event.
pub trait PageLifecycle {
    /// Register `callback` to run exactly once when the page content has
    /// loaded. If loading already completed, the callback runs immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Lifecycle`] if the listener cannot be attached.
    fn on_content_loaded(&self, callback: LoadCallback) -> Result<(), DarkModeError>;
}
