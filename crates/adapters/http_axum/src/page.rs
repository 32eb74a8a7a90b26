//! Demo page — a button wired to the wasm-exported toggle.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use darkmode_domain::settings::{MarkerTarget, ThemeSettings};

use crate::state::AppState;

/// File name `wasm-bindgen` gives the JS glue of the browser adapter.
pub const BUNDLE_ENTRY: &str = "darkmode_adapter_web.js";

/// Index page template.
///
/// Every configurable value reaches the page through `data-*` attributes on
/// `<html>`; the inline module script reads the bundle URL from there
/// instead of having it spliced into its source.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    storage_key: String,
    marker_class: String,
    target: &'static str,
    selector: String,
    bundle_entry: String,
}

impl IndexPage {
    #[must_use]
    pub fn new(settings: &ThemeSettings, bundle_path: &str) -> Self {
        let target = match settings.marker_target {
            MarkerTarget::Body => "body",
            MarkerTarget::DocumentElement => "html",
        };
        Self {
            selector: format!("{target}.{}", css_ident(&settings.marker_class)),
            storage_key: settings.storage_key.clone(),
            marker_class: settings.marker_class.clone(),
            target,
            bundle_entry: format!("{}/{BUNDLE_ENTRY}", bundle_path.trim_end_matches('/')),
        }
    }
}

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — demo page.
pub async fn index(State(state): State<AppState>) -> IndexPage {
    IndexPage::new(&state.settings, &state.bundle_path)
}

/// Escape a class name for use in a CSS selector.
fn css_ident(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.chars().enumerate() {
        let leading_digit = i == 0 && c.is_ascii_digit();
        if (c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()) && !leading_digit {
            out.push(c);
        } else {
            out.push_str(&format!("\\{:x} ", u32::from(c)));
        }
    }
    out
}
