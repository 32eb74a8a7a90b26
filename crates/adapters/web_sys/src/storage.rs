//! `window.localStorage` as a [`PreferenceStore`].

use darkmode_app::ports::PreferenceStore;
use darkmode_domain::error::{DarkModeError, StorageError};
use web_sys::Storage;

use crate::js_reason;

/// Preference store backed by the origin's `localStorage`.
///
/// The `Storage` handle is looked up on every call; browsers may withhold it
/// (private mode, disabled cookies) and that is reported as a storage error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(operation: &'static str, key: &str) -> Result<Storage, DarkModeError> {
        let failure = |reason: String| StorageError {
            operation,
            key: key.to_string(),
            reason,
        };
        let window = web_sys::window().ok_or_else(|| failure("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|err| failure(js_reason(&err)))?
            .ok_or_else(|| failure("localStorage unavailable".to_string()).into())
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        Self::storage("read", key)?.get_item(key).map_err(|err| {
            StorageError {
                operation: "read",
                key: key.to_string(),
                reason: js_reason(&err),
            }
            .into()
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        Self::storage("write", key)?
            .set_item(key, value)
            .map_err(|err| {
                StorageError {
                    operation: "write",
                    key: key.to_string(),
                    reason: js_reason(&err),
                }
                .into()
            })
    }
}
