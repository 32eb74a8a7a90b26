//! In-memory class list acting as the `ThemeMarker`.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

use darkmode_app::ports::ThemeMarker;
use darkmode_domain::error::{DarkModeError, MarkerError};

/// Class list of a page root element, with one class acting as the marker.
#[derive(Debug, Clone)]
pub struct InMemoryClassList {
    marker_class: String,
    classes: Arc<Mutex<BTreeSet<String>>>,
}

impl InMemoryClassList {
    /// Empty class list using `marker_class` as the marker.
    #[must_use]
    pub fn new(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
            classes: Arc::default(),
        }
    }

    /// Add an arbitrary class, e.g. the marker before load.
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(class.into());
        self
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(class)
    }

    /// Whether the marker class is present.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.contains(&self.marker_class)
    }

    fn poisoned(&self, operation: &'static str) -> DarkModeError {
        MarkerError {
            operation,
            class: self.marker_class.clone(),
            reason: "class list lock poisoned".to_string(),
        }
        .into()
    }
}

impl ThemeMarker for InMemoryClassList {
    fn is_present(&self) -> Result<bool, DarkModeError> {
        let classes = self.classes.lock().map_err(|_| self.poisoned("read"))?;
        Ok(classes.contains(&self.marker_class))
    }

    fn toggle(&self) -> Result<(), DarkModeError> {
        let mut classes = self.classes.lock().map_err(|_| self.poisoned("toggle"))?;
        if !classes.remove(&self.marker_class) {
            classes.insert(self.marker_class.clone());
        }
        Ok(())
    }

    fn add(&self) -> Result<(), DarkModeError> {
        let mut classes = self.classes.lock().map_err(|_| self.poisoned("add"))?;
        classes.insert(self.marker_class.clone());
        Ok(())
    }
}
