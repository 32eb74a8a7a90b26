//! Theme marker port — the presence flag on the page root.

use std::sync::Arc;

use darkmode_domain::error::DarkModeError;

/// A single class flag on the page root element.
///
/// Implementations are bound to one class name at construction.
pub trait ThemeMarker {
    /// Whether the marker is currently present.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Marker`] if the root element is unreachable.
    fn is_present(&self) -> Result<bool, DarkModeError>;

    /// Invert presence of the marker.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Marker`] if the root element is unreachable.
    fn toggle(&self) -> Result<(), DarkModeError>;

    /// Make the marker present. A no-op when it already is.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Marker`] if the root element is unreachable.
    fn add(&self) -> Result<(), DarkModeError>;
}

impl<T: ThemeMarker + ?Sized> ThemeMarker for Arc<T> {
    fn is_present(&self) -> Result<bool, DarkModeError> {
        (**self).is_present()
    }

    fn toggle(&self) -> Result<(), DarkModeError> {
        (**self).toggle()
    }

    fn add(&self) -> Result<(), DarkModeError> {
        (**self).add()
    }
}
