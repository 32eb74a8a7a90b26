//! Preference store port — persistent string key-value storage.

use std::sync::Arc;

use darkmode_domain::error::DarkModeError;

/// Origin-scoped key-value storage that survives page reloads.
pub trait PreferenceStore {
    /// Read the value under `key`, or `None` if nothing was ever written.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Storage`] if the backing store is unavailable.
    fn read(&self, key: &str) -> Result<Option<String>, DarkModeError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Storage`] if the write is refused.
    fn write(&self, key: &str, value: &str) -> Result<(), DarkModeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        (**self).write(key, value)
    }
}
