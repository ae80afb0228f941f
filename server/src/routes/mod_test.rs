use super::*;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::state::test_helpers::{test_app_state, test_app_state_with, test_config};

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// HEALTH / ROUTING
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(test_app_state());
    let response = send(app, Request::get("/healthz").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = api_routes(test_app_state());
    let response = send(app, Request::get("/api/widgets").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = api_routes(test_app_state());
    let response = send(app, Request::get("/api/vendors/abc").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// AUTH
// =============================================================================

#[tokio::test]
async fn api_requires_token_when_configured() {
    let mut config = test_config();
    config.api_token = Some("s3cret".to_owned());
    let app = api_routes(test_app_state_with(config));

    let response = send(app, Request::get("/api/vendors").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "missing or invalid bearer token");
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let mut config = test_config();
    config.api_token = Some("s3cret".to_owned());
    let app = api_routes(test_app_state_with(config));

    let request = Request::get("/api/items")
        .header(AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(app, request).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn healthz_is_open_when_token_configured() {
    let mut config = test_config();
    config.api_token = Some("s3cret".to_owned());
    let app = api_routes(test_app_state_with(config));

    let response = send(app, Request::get("/healthz").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_token_reaches_body_validation() {
    let mut config = test_config();
    config.api_token = Some("s3cret".to_owned());
    let app = api_routes(test_app_state_with(config));

    let request = Request::post("/api/vendors")
        .header(AUTHORIZATION, "Bearer s3cret")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{"))
        .unwrap();
    assert_eq!(send(app, request).await.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// BODY REJECTIONS
// =============================================================================

#[tokio::test]
async fn malformed_json_is_bad_request_with_error_body() {
    let app = api_routes(test_app_state());
    let response = send(app, post_json("/api/vendors", "{\"name\":")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn missing_required_field_is_unprocessable() {
    let app = api_routes(test_app_state());
    let response = send(app, post_json("/api/items", r#"{"name":"Pen"}"#)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media_type() {
    let app = api_routes(test_app_state());
    let request = Request::post("/api/vendors").body(Body::from(r#"{"name":"Acme"}"#)).unwrap();
    assert_eq!(send(app, request).await.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn multipart_to_resource_without_attachment_is_rejected() {
    let app = api_routes(test_app_state());
    let request = Request::post("/api/vendors")
        .header(CONTENT_TYPE, "multipart/form-data; boundary=b")
        .body(Body::from("--b--\r\n"))
        .unwrap();
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Vendors does not accept file uploads");
}

#[tokio::test]
async fn multipart_without_payload_is_unprocessable() {
    let app = api_routes(test_app_state());
    let body = "--b\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.pdf\"\r\n\r\n%PDF\r\n--b--\r\n";
    let request = Request::post("/api/grns")
        .header(CONTENT_TYPE, "multipart/form-data; boundary=b")
        .body(Body::from(body))
        .unwrap();
    assert_eq!(send(app, request).await.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let mut config = test_config();
    config.max_upload_bytes = 16;
    let app = api_routes(test_app_state_with(config));

    let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(64));
    let response = send(app, post_json("/api/vendors", &body)).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// UPLOADS
// =============================================================================

#[tokio::test]
async fn uploads_are_served_from_upload_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("grns")).unwrap();
    std::fs::write(dir.path().join("grns/note.txt"), "delivered").unwrap();

    let mut config = test_config();
    config.upload_dir = dir.path().to_path_buf();
    let app = api_routes(test_app_state_with(config));

    let response = send(app, Request::get("/uploads/grns/note.txt").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"delivered");
}

fn grn_multipart(method: Method, uri: &str) -> Request<Body> {
    let payload = r#"{"grnNumber":"GRN-1","grnDate":"2024-05-02","purchaseOrderId":1,"locationId":2,"receivedQuantity":10,"acceptedQuantity":9}"#;
    let body = format!(
        "--b\r\nContent-Disposition: form-data; name=\"payload\"\r\n\r\n{payload}\r\n\
         --b\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.pdf\"\r\n\r\n%PDF\r\n--b--\r\n"
    );
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "multipart/form-data; boundary=b")
        .body(Body::from(body))
        .unwrap()
}

fn stored_files(dir: &std::path::Path) -> Vec<std::ffi::OsString> {
    std::fs::read_dir(dir.join("grns"))
        .map(|entries| entries.filter_map(Result::ok).map(|e| e.file_name()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn failed_create_removes_uploaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.upload_dir = dir.path().to_path_buf();
    let app = api_routes(test_app_state_with(config));

    // No database is reachable, so the insert fails after the file is stored.
    let response = send(app, grn_multipart(Method::POST, "/api/grns")).await;
    assert!(response.status().is_server_error());
    assert!(stored_files(dir.path()).is_empty());
}

#[tokio::test]
async fn failed_update_removes_uploaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.upload_dir = dir.path().to_path_buf();
    let app = api_routes(test_app_state_with(config));

    let response = send(app, grn_multipart(Method::PUT, "/api/grns/1")).await;
    assert!(response.status().is_server_error());
    assert!(stored_files(dir.path()).is_empty());
}
