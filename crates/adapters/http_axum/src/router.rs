//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the demo page at `/`, the settings API under `/api`, and serves
/// `bundle_dir` under the state's bundle path. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build(state: AppState, bundle_dir: &Path) -> Router {
    let bundle_path = format!("/{}", state.bundle_path.trim_matches('/'));
    Router::new()
        .route("/", get(crate::page::index))
        .route("/health", get(health_check))
        .route("/api/settings", get(crate::api::settings))
        .nest_service(&bundle_path, ServeDir::new(bundle_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use darkmode_domain::settings::ThemeSettings;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build(
            AppState::new(ThemeSettings::default(), "/pkg"),
            Path::new("does-not-exist"),
        )
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_index_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"id="theme-toggle""#));
        assert!(body.contains("toggle_dark_mode"));
    }

    #[tokio::test]
    async fn should_return_settings_as_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/settings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["storage_key"], "darkMode");
        assert_eq!(json["marker_class"], "dark-mode");
        assert_eq!(json["marker_target"], "body");
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_bundle_file() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/pkg/darkmode_adapter_web.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
