//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the page it
//! runs in. All of them are synchronous: every call completes on the UI
//! thread before control returns.

pub mod lifecycle;
pub mod marker;
pub mod preference_store;

pub use lifecycle::{LoadCallback, PageLifecycle};
pub use marker::ThemeMarker;
pub use preference_store::PreferenceStore;
