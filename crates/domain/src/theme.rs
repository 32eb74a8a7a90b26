//! Theme state — whether dark mode is active, and how it is persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Two-valued dark mode state.
///
/// Observable as the presence of the marker class on the page root, and
/// persisted as one of two literals: `"enabled"` or `"disabled"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    Enabled,
    Disabled,
}

impl ThemeState {
    /// Derive the state from the presence of the marker.
    #[must_use]
    pub fn from_marker(present: bool) -> Self {
        if present {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// Whether dark mode is active.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    /// The literal written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeState {
    type Err = ValidationError;

    /// Parse one of the two persisted literals. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            other => Err(ValidationError::UnknownThemeState(other.to_string())),
        }
    }
}

/// What was found under the storage key at load time.
///
/// Absence is a distinct state from `"disabled"`: it means no preference was
/// ever recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPreference {
    Missing,
    Recognized(ThemeState),
    Unrecognized(String),
}

impl StoredPreference {
    /// Classify a raw value read from the preference store.
    #[must_use]
    pub fn classify(raw: Option<String>) -> Self {
        match raw {
            None => Self::Missing,
            Some(value) => match value.parse::<ThemeState>() {
                Ok(state) => Self::Recognized(state),
                Err(_) => Self::Unrecognized(value),
            },
        }
    }

    /// Whether load-time restoration should add the marker.
    ///
    /// Only a stored `"enabled"` qualifies. Restoration never removes the
    /// marker, so every other case is a no-op.
    #[must_use]
    pub fn should_apply_marker(&self) -> bool {
        matches!(self, Self::Recognized(ThemeState::Enabled))
    }
}
