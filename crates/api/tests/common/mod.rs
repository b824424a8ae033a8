//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of an `#[sqlx::test]` pool and provides small request helpers
//! driven through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kompass_api::auth::jwt::{generate_access_token, JwtConfig, TokenSubject};
use kompass_api::config::ServerConfig;
use kompass_api::router::build_app_router;
use kompass_api::state::AppState;
use kompass_api::storage::FileStore;

/// Fixed signing secret for tests; tokens minted here validate against the
/// app built by [`build_test_app`].
const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: test_upload_dir(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// A unique per-process upload directory under the system temp dir.
fn test_upload_dir() -> String {
    std::env::temp_dir()
        .join(format!("kompass-test-uploads-{}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors what `main.rs` wires up so tests exercise
/// the production stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let files = FileStore::new(&config.upload_dir);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        files: Arc::new(files),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Token minting
// ---------------------------------------------------------------------------

/// Mint an access token with the test signing secret.
pub fn mint_token(
    user_id: i64,
    username: &str,
    role: &str,
    admin: bool,
    participant_id: Option<i64>,
) -> String {
    let subject = TokenSubject {
        user_id,
        username,
        role,
        admin,
        participant_id,
    };
    generate_access_token(&subject, &test_config().jwt).expect("token generation should succeed")
}

/// Token for a plain case worker account.
pub fn staff_token(username: &str) -> String {
    mint_token(1, username, "user", false, None)
}

/// Token for an admin account.
pub fn admin_token() -> String {
    mint_token(2, "admin", "user", true, None)
}

/// Token for a participant-linked (deltagare) account.
pub fn deltagare_token(participant_id: i64) -> String {
    mint_token(3, "deltagare", "deltagare", false, Some(participant_id))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// A complete registration payload; tweak fields per test as needed.
pub fn participant_payload(first_name: &str, personal_number: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": first_name,
        "lastName": "Testsson",
        "gender": "kvinna",
        "educationLevel": "gymnasium",
        "license": "B",
        "personalNumber": personal_number,
        "address": "Storgatan 1",
        "postalCode": "111 22",
        "city": "Stockholm",
        "phoneNumber": "070-1234567",
        "unemploymentTime": "6-12",
        "initiatedBy": "AF"
    })
}

/// Register a participant through the API and return its id.
pub async fn register_participant(app: Router, token: &str, first_name: &str) -> i64 {
    let payload = participant_payload(first_name, "19900101-1234");
    let response = post_json_auth(app, "/api/v1/participants", token, payload).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("participant id")
}
