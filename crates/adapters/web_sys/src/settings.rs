//! Theme settings read from `data-*` attributes on `<html>`.
//!
//! The server renders `data-storage-key`, `data-marker-class` and
//! `data-marker-target` so the page and the wasm module agree on names.
//! Missing attributes fall back to the defaults.

use darkmode_domain::error::DarkModeError;
use darkmode_domain::settings::{MarkerTarget, ThemeSettings};
use wasm_bindgen::JsCast;

/// Build settings from a dataset lookup (`camelCase` keys).
pub(crate) fn from_dataset(
    get: impl Fn(&str) -> Option<String>,
) -> Result<ThemeSettings, DarkModeError> {
    let mut builder = ThemeSettings::builder();
    if let Some(key) = get("storageKey") {
        builder = builder.storage_key(key);
    }
    if let Some(class) = get("markerClass") {
        builder = builder.marker_class(class);
    }
    match get("markerTarget").as_deref() {
        Some("html" | "document_element") => {
            builder = builder.marker_target(MarkerTarget::DocumentElement);
        }
        Some("body") => builder = builder.marker_target(MarkerTarget::Body),
        Some(other) => tracing::warn!(marker_target = other, "unknown marker target, using body"),
        None => {}
    }
    builder.build()
}

/// Settings for the current document.
///
/// # Errors
///
/// Returns [`DarkModeError::Validation`] if an attribute holds an invalid
/// value, e.g. an empty storage key.
pub fn from_document() -> Result<ThemeSettings, DarkModeError> {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return Ok(ThemeSettings::default());
    };
    let dataset = root.unchecked_into::<web_sys::HtmlElement>().dataset();
    from_dataset(|name| dataset.get(name))
}
