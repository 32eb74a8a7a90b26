//! Theme service — toggle dark mode and restore the saved preference on load.

use darkmode_domain::error::DarkModeError;
use darkmode_domain::settings::ThemeSettings;
use darkmode_domain::theme::{StoredPreference, ThemeState};

use crate::ports::{PageLifecycle, PreferenceStore, ThemeMarker};

/// Application service for the dark mode preference.
///
/// The marker on the page root and the value in the preference store agree
/// after every [`toggle`](Self::toggle). Restoration only ever adds the
/// marker; it never removes it.
pub struct ThemeService<S, M> {
    settings: ThemeSettings,
    store: S,
    marker: M,
}

impl<S: PreferenceStore, M: ThemeMarker> ThemeService<S, M> {
    /// Create a new service backed by the given store and marker.
    pub fn new(settings: ThemeSettings, store: S, marker: M) -> Self {
        Self {
            settings,
            store,
            marker,
        }
    }

    /// Settings the service was built with.
    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Flip the marker and persist the resulting state.
    ///
    /// The persisted literal is derived from the marker as observed after the
    /// flip, not from the previous stored value.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Marker`] or [`DarkModeError::Storage`] when
    /// the underlying adapter fails.
    pub fn toggle(&self) -> Result<ThemeState, DarkModeError> {
        self.marker.toggle()?;
        let state = ThemeState::from_marker(self.marker.is_present()?);
        self.store.write(&self.settings.storage_key, state.as_str())?;
        tracing::debug!(state = %state, key = %self.settings.storage_key, "theme toggled");
        Ok(state)
    }

    /// Apply the stored preference to the marker.
    ///
    /// Adds the marker only when the stored value is exactly `"enabled"`.
    /// Returns what was found in the store.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Storage`] or [`DarkModeError::Marker`] when
    /// the underlying adapter fails.
    pub fn restore(&self) -> Result<StoredPreference, DarkModeError> {
        let raw = self.store.read(&self.settings.storage_key)?;
        let preference = StoredPreference::classify(raw);
        if preference.should_apply_marker() {
            self.marker.add()?;
            tracing::debug!(key = %self.settings.storage_key, "restored dark mode");
        } else {
            tracing::debug!(?preference, "no dark mode preference to restore");
        }
        Ok(preference)
    }

    /// Current state as shown by the marker. Does not touch the store.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Marker`] when the marker cannot be read.
    pub fn current(&self) -> Result<ThemeState, DarkModeError> {
        self.marker.is_present().map(ThemeState::from_marker)
    }
}

impl<S, M> ThemeService<S, M>
where
    S: PreferenceStore + 'static,
    M: ThemeMarker + 'static,
{
    /// Register [`restore`](Self::restore) to run once when the page content
    /// has loaded.
    ///
    /// Failures inside the deferred restoration are logged, since there is no
    /// caller left to report them to.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Lifecycle`] if the hook cannot be registered.
    pub fn install<L: PageLifecycle>(self, lifecycle: &L) -> Result<(), DarkModeError> {
        lifecycle.on_content_loaded(Box::new(move || {
            if let Err(err) = self.restore() {
                tracing::warn!(error = %err, "failed to restore theme preference");
            }
        }))
    }
}
