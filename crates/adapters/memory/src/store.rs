//! In-memory `PreferenceStore`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use darkmode_app::ports::PreferenceStore;
use darkmode_domain::error::{DarkModeError, StorageError};

/// String key-value store held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if written during an earlier session.
    #[must_use]
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }

    /// Snapshot of the value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

fn poisoned(operation: &'static str, key: &str) -> DarkModeError {
    StorageError {
        operation,
        key: key.to_string(),
        reason: "store lock poisoned".to_string(),
    }
    .into()
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        let values = self.values.lock().map_err(|_| poisoned("read", key))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        let mut values = self.values.lock().map_err(|_| poisoned("write", key))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
