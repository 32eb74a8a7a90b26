//! # darkmode-adapter-memory
//!
//! In-process implementations of every darkmode port.
//!
//! | Port | Implementation | Stands in for |
//! |------|----------------|---------------|
//! | `PreferenceStore` | [`InMemoryPreferenceStore`] | `window.localStorage` |
//! | `ThemeMarker` | [`InMemoryClassList`] | `classList` of the page root |
//! | `PageLifecycle` | [`ManualLifecycle`] | `DOMContentLoaded` |
//!
//! Store and class list are cheap to clone; clones share state, so a test
//! can keep a handle while the service owns another.
//!
//! ## Dependency rule
//!
//! Depends on `darkmode-app` (port traits) and `darkmode-domain` only.

mod class_list;
mod lifecycle;
mod store;

pub use class_list::InMemoryClassList;
pub use lifecycle::ManualLifecycle;
pub use store::InMemoryPreferenceStore;
