//! End-to-end smoke tests for the darkmoded HTTP stack.
//!
//! Each test builds the real router over a fixture bundle directory and
//! exercises it via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use darkmode_adapter_http_axum::router;
use darkmode_adapter_http_axum::state::AppState;
use darkmode_domain::settings::{MarkerTarget, ThemeSettings};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pkg")
}

fn app_with(settings: ThemeSettings) -> axum::Router {
    router::build(AppState::new(settings, "/pkg"), &fixture_dir())
}

fn app() -> axum::Router {
    app_with(ThemeSettings::default())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Demo page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_page_with_default_names() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-storage-key="darkMode""#));
    assert!(body.contains(r#"data-marker-class="dark-mode""#));
    assert!(body.contains("body.dark-mode"));
    assert!(body.contains(r#"data-bundle-entry="/pkg/darkmode_adapter_web.js""#));
}

#[tokio::test]
async fn should_render_page_with_configured_names() {
    let settings = ThemeSettings::builder()
        .storage_key("site-theme")
        .marker_class("night")
        .marker_target(MarkerTarget::DocumentElement)
        .build()
        .unwrap();
    let (status, body) = get(app_with(settings), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-storage-key="site-theme""#));
    assert!(body.contains(r#"data-marker-target="html""#));
    assert!(body.contains("html.night"));
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_bundle_files() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/pkg/darkmode_adapter_web.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("javascript"));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_bundle_file() {
    let (status, _) = get(app(), "/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_expose_settings() {
    let (status, body) = get(app(), "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""storage_key":"darkMode""#));
}
