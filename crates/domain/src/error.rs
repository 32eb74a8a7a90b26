//! Common error types used across the workspace.
//!
//! Each layer raises its own typed error and converts into [`DarkModeError`]
//! via `#[from]`.

/// Top-level error for every darkmode operation.
#[derive(Debug, thiserror::Error)]
pub enum DarkModeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("preference storage error")]
    Storage(#[from] StorageError),

    #[error("theme marker error")]
    Marker(#[from] MarkerError),

    #[error("page lifecycle error")]
    Lifecycle(#[from] LifecycleError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    #[error("marker class must not be empty")]
    EmptyMarkerClass,

    #[error("marker class {0:?} must not contain whitespace")]
    InvalidMarkerClass(String),

    #[error("unknown theme state {0:?}")]
    UnknownThemeState(String),
}

/// The preference store could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage {operation} failed for key {key:?}: {reason}")]
pub struct StorageError {
    pub operation: &'static str,
    pub key: String,
    pub reason: String,
}

/// The marker element could not be found or updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("marker {operation} failed for class {class:?}: {reason}")]
pub struct MarkerError {
    pub operation: &'static str,
    pub class: String,
    pub reason: String,
}

/// The page load hook could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to register load hook: {reason}")]
pub struct LifecycleError {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_top_level() {
        let err: DarkModeError = ValidationError::EmptyStorageKey.into();
        assert!(matches!(
            err,
            DarkModeError::Validation(ValidationError::EmptyStorageKey)
        ));
    }

    #[test]
    fn should_describe_storage_failure() {
        let err = StorageError {
            operation: "write",
            key: "darkMode".to_string(),
            reason: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "storage write failed for key \"darkMode\": quota exceeded"
        );
    }

    #[test]
    fn should_describe_marker_failure() {
        let err = MarkerError {
            operation: "toggle",
            class: "dark-mode".to_string(),
            reason: "no document".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "marker toggle failed for class \"dark-mode\": no document"
        );
    }
}
