//! JSON API.

use axum::Json;
use axum::extract::State;

use darkmode_domain::settings::ThemeSettings;

use crate::state::AppState;

/// `GET /api/settings` — storage key, marker class and marker target.
pub async fn settings(State(state): State<AppState>) -> Json<ThemeSettings> {
    Json(ThemeSettings::clone(&state.settings))
}
