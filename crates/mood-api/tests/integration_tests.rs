//! # Integration Tests for mood-api
//!
//! Drives the assembled router through `tower::ServiceExt::oneshot`:
//! health probes, the verification stub, widget configuration, and the
//! OpenAPI document.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mood_core::{VerificationId, WidgetConfig};
use tower::ServiceExt;

use mood_api::{ApiConfig, AppState};

fn test_app() -> axum::Router {
    mood_api::app(AppState::default())
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn verify_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/verify")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn proof_body() -> String {
    serde_json::json!({
        "merkle_root": "0x0d1b",
        "nullifier_hash": "0x2c9e",
        "proof": "0xabcdef",
        "verification_level": "device",
        "address": "0xfeedface"
    })
    .to_string()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- POST /api/verify ---------------------------------------------------------

#[tokio::test]
async fn test_verify_issues_id_for_proof() {
    let response = test_app().oneshot(verify_request(proof_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body.get("error").is_none());
    let id: VerificationId = body["id"].as_str().unwrap().parse().unwrap();
    assert!(id.as_str().starts_with("wld_"));
    assert!(id.timestamp_ms() > 1_700_000_000_000);
}

#[tokio::test]
async fn test_verify_accepts_any_json_shape() {
    for body in ["{}", "[]", "null", r#"{"proof": 42}"#] {
        let response = test_app().oneshot(verify_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "body {body}");
        assert_eq!(body_json(response).await["success"], true);
    }
}

#[tokio::test]
async fn test_verify_ids_are_distinct() {
    let app = test_app();
    let mut seen = HashSet::new();
    for _ in 0..20 {
        let response = app.clone().oneshot(verify_request(proof_body())).await.unwrap();
        let body = body_json(response).await;
        assert!(seen.insert(body["id"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn test_verify_rejects_non_json_with_envelope() {
    let response = test_app()
        .oneshot(verify_request("merkle_root=0x0d1b"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": false, "error": "Verification failed"})
    );
}

#[tokio::test]
async fn test_verify_rejects_oversized_body_with_envelope() {
    let padding = "a".repeat(128 * 1024);
    let body = serde_json::json!({ "proof": padding }).to_string();
    let response = test_app().oneshot(verify_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn test_verify_only_accepts_post() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/verify")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// -- Widget configuration -----------------------------------------------------

#[tokio::test]
async fn test_widget_config_reflects_app_id() {
    let config = ApiConfig {
        port: 0,
        widget: WidgetConfig::new("app_staging_0f1e"),
    };
    let response = mood_api::app(AppState::new(config))
        .oneshot(
            Request::builder()
                .uri("/api/widget-config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "app_id": "app_staging_0f1e",
            "action": "verify",
            "verification_level": "device"
        })
    );
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_json_lists_verify() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/api/verify"]["post"].is_object());
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
