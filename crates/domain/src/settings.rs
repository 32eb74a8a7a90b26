//! Theme settings — the storage key and the marker class shared by every
//! adapter.

use serde::{Deserialize, Serialize};

use crate::error::{DarkModeError, ValidationError};

/// Default key the preference is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";

/// Default class toggled on the page root.
pub const DEFAULT_MARKER_CLASS: &str = "dark-mode";

/// Which element of the page carries the marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerTarget {
    /// `<body>`.
    #[default]
    Body,
    /// `<html>`.
    DocumentElement,
}

/// Names used to persist and display the theme.
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub storage_key: String,
    pub marker_class: String,
    pub marker_target: MarkerTarget,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            marker_target: MarkerTarget::default(),
        }
    }
}

impl ThemeSettings {
    /// Create a builder for constructing [`ThemeSettings`].
    #[must_use]
    pub fn builder() -> ThemeSettingsBuilder {
        ThemeSettingsBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Validation`] when the key is empty, or the
    /// class is empty or contains whitespace (`classList` rejects such tokens).
    pub fn validate(&self) -> Result<(), DarkModeError> {
        if self.storage_key.is_empty() {
            return Err(ValidationError::EmptyStorageKey.into());
        }
        if self.marker_class.is_empty() {
            return Err(ValidationError::EmptyMarkerClass.into());
        }
        if self.marker_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ValidationError::InvalidMarkerClass(self.marker_class.clone()).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ThemeSettings`].
#[derive(Debug, Default)]
pub struct ThemeSettingsBuilder {
    storage_key: Option<String>,
    marker_class: Option<String>,
    marker_target: Option<MarkerTarget>,
}

impl ThemeSettingsBuilder {
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn marker_target(mut self, target: MarkerTarget) -> Self {
        self.marker_target = Some(target);
        self
    }

    /// Consume the builder, validate, and return [`ThemeSettings`].
    ///
    /// Unset fields fall back to [`DEFAULT_STORAGE_KEY`],
    /// [`DEFAULT_MARKER_CLASS`] and [`MarkerTarget::Body`].
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Validation`] if an explicit value is invalid.
    pub fn build(self) -> Result<ThemeSettings, DarkModeError> {
        let settings = ThemeSettings {
            storage_key: self
                .storage_key
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            marker_class: self
                .marker_class
                .unwrap_or_else(|| DEFAULT_MARKER_CLASS.to_string()),
            marker_target: self.marker_target.unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}
