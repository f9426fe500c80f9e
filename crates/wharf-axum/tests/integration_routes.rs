//! Integration tests for the web adapter.
//!
//! These tests verify that routes are correctly wired to handlers and
//! that the session surface behaves per its contract.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wharf_axum::testkit::TestApp;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_request_as(uri: &str, user_id: i64) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .body(Body::empty())
        .unwrap()
}

fn put_json_as(uri: &str, user_id: i64, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = TestApp::spawn().await.unwrap();

    let response = app.router().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");

    app.release().await;
}

#[tokio::test]
async fn me_without_header_is_unauthorized() {
    let app = TestApp::spawn().await.unwrap();

    let response = app.router().oneshot(get_request("/api/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.release().await;
}

#[tokio::test]
async fn me_with_unknown_user_is_unauthorized() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .router()
        .oneshot(get_request_as("/api/me", 999))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.release().await;
}

#[tokio::test]
async fn me_returns_the_seeded_user() {
    let app = TestApp::spawn().await.unwrap();
    let user = app.create_user("fake").await.unwrap();

    let response = app
        .router()
        .oneshot(get_request_as("/api/me", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], user.id);
    assert_eq!(json["name"], "fake");

    app.release().await;
}

#[tokio::test]
async fn invalid_user_header_is_a_bad_request() {
    let app = TestApp::spawn().await.unwrap();

    let request = Request::builder()
        .uri("/api/me")
        .header("x-user-id", "not-a-number")
        .body(Body::empty())
        .unwrap();
    let response = app.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    app.release().await;
}

#[tokio::test]
async fn session_value_round_trips() {
    let app = TestApp::spawn().await.unwrap();
    let user = app.create_user("fake").await.unwrap();

    // Unset key: 404 with a JSON error body.
    let response = app
        .router()
        .oneshot(get_request_as("/api/session/foo", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Store a value.
    let response = app
        .router()
        .oneshot(put_json_as("/api/session/foo", user.id, r#"{"value":"bar"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Read it back.
    let response = app
        .router()
        .oneshot(get_request_as("/api/session/foo", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["key"], "foo");
    assert_eq!(json["value"], "bar");

    app.release().await;
}

#[tokio::test]
async fn deleted_session_value_is_gone() {
    let app = TestApp::spawn().await.unwrap();
    let user = app.create_user("fake").await.unwrap();

    app.router()
        .oneshot(put_json_as("/api/session/foo", user.id, r#"{"value":"bar"}"#))
        .await
        .unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/session/foo")
        .header("x-user-id", user.id.to_string())
        .body(Body::empty())
        .unwrap();
    let response = app.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .router()
        .oneshot(get_request_as("/api/session/foo", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    app.release().await;
}

#[tokio::test]
async fn session_writes_require_a_user() {
    let app = TestApp::spawn().await.unwrap();

    let request = Request::builder()
        .method("PUT")
        .uri("/api/session/foo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"value":"bar"}"#))
        .unwrap();
    let response = app.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.release().await;
}

#[tokio::test]
async fn session_values_are_scoped_per_user() {
    let app = TestApp::spawn().await.unwrap();
    let alice = app.create_user("alice").await.unwrap();
    let bob = app.create_user("bob").await.unwrap();

    app.router()
        .oneshot(put_json_as("/api/session/foo", alice.id, r#"{"value":"bar"}"#))
        .await
        .unwrap();

    let response = app
        .router()
        .oneshot(get_request_as("/api/session/foo", bob.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    app.release().await;
}
