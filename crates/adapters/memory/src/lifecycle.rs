//! Hand-fired `PageLifecycle`.

use std::cell::{Cell, RefCell};

use darkmode_app::ports::{LoadCallback, PageLifecycle};
use darkmode_domain::error::DarkModeError;

/// Load hook fired by hand.
///
/// Callbacks registered before [`fire`](Self::fire) are queued; callbacks
/// registered afterwards run immediately, like a listener attached once the
/// document is already interactive.
#[derive(Default)]
pub struct ManualLifecycle {
    loaded: Cell<bool>,
    pending: RefCell<Vec<LoadCallback>>,
}

impl ManualLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle whose content has already loaded.
    #[must_use]
    pub fn loaded() -> Self {
        let lifecycle = Self::default();
        lifecycle.loaded.set(true);
        lifecycle
    }

    /// Signal that the page content has loaded.
    ///
    /// Runs every queued callback once. Later calls do nothing.
    pub fn fire(&self) {
        if self.loaded.replace(true) {
            return;
        }
        let callbacks = std::mem::take(&mut *self.pending.borrow_mut());
        tracing::debug!(count = callbacks.len(), "content loaded");
        for callback in callbacks {
            callback();
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl PageLifecycle for ManualLifecycle {
    fn on_content_loaded(&self, callback: LoadCallback) -> Result<(), DarkModeError> {
        if self.loaded.get() {
            callback();
        } else {
            self.pending.borrow_mut().push(callback);
        }
        Ok(())
    }
}
