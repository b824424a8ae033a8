//! HTTP-level integration tests for the admin account endpoints and the
//! login audit trail.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, mint_token, post_json, put_json_auth,
    staff_token,
};
use sqlx::PgPool;

const STRONG_PASSWORD: &str = "Sommar2024!";

/// Register an account via the public endpoint and return its id.
async fn seed_account(app: axum::Router, email: &str, username: &str) -> i64 {
    let body = serde_json::json!({
        "email": email,
        "username": username,
        "password": STRONG_PASSWORD
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_endpoints_reject_non_admins(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/admin/users", &staff_token("karin")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let unauthenticated = common::get(app, "/api/v1/admin/users").await;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_lists_accounts_without_hashes(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_account(app.clone(), "anna@example.com", "anna123").await;

    let response = get_auth(app, "/api/v1/admin/users", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["username"], "anna123");
    assert!(rows[0].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_updates_role_and_admin_flag(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = seed_account(app.clone(), "anna@example.com", "anna123").await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/users/{id}"),
        &admin_token(),
        serde_json::json!({ "admin": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["admin"], true);
    assert_eq!(json["data"]["username"], "anna123");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_update_rejects_unknown_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = seed_account(app.clone(), "anna@example.com", "anna123").await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/users/{id}"),
        &admin_token(),
        serde_json::json!({ "role": "superuser" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_deletes_accounts_but_not_their_own(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = seed_account(app.clone(), "anna@example.com", "anna123").await;

    // Token whose subject id matches the target account.
    let self_token = mint_token(id, "anna123", "user", true, None);
    let own = delete_auth(app.clone(), &format!("/api/v1/admin/users/{id}"), &self_token).await;
    assert_eq!(own.status(), StatusCode::BAD_REQUEST);

    let other = delete_auth(app.clone(), &format!("/api/v1/admin/users/{id}"), &admin_token()).await;
    assert_eq!(other.status(), StatusCode::NO_CONTENT);

    let gone = get_auth(app, &format!("/api/v1/admin/users/{id}"), &admin_token()).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_attempts_listing_honours_the_limit(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_account(app.clone(), "anna@example.com", "anna123").await;

    for _ in 0..3 {
        let body = serde_json::json!({ "email": "anna@example.com", "password": "Fel2024!x" });
        post_json(app.clone(), "/api/v1/auth/login", body).await;
    }

    let limited = body_json(
        get_auth(
            app.clone(),
            "/api/v1/admin/login-attempts?limit=2",
            &admin_token(),
        )
        .await,
    )
    .await;
    assert_eq!(limited["data"].as_array().unwrap().len(), 2);

    let all = body_json(get_auth(app, "/api/v1/admin/login-attempts", &admin_token()).await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);
    assert_eq!(all["data"][0]["success"], false);
}
