//! # darkmode-domain
//!
//! Pure domain model for the darkmode preference toggle.
//!
//! ## Responsibilities
//! - Define the two-valued **theme state** and its persisted literals
//!   (`"enabled"` / `"disabled"`)
//! - Classify raw values read back from storage (**stored preference**)
//! - Define the **settings** naming the storage key and the marker class
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod settings;
pub mod theme;
