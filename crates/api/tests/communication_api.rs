//! HTTP-level integration tests for chat messages and notes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, deltagare_token, get_auth, post_json_auth, register_participant, staff_token,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sending_and_reading_marks_the_thread_read(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;
    let base = format!("/api/v1/participants/{id}/messages");

    let sent = post_json_auth(
        app.clone(),
        &base,
        &token,
        serde_json::json!({ "text": "Hej Anna!" }),
    )
    .await;
    assert_eq!(sent.status(), StatusCode::CREATED);

    let before = body_json(get_auth(app.clone(), &format!("{base}/unread-count"), &token).await)
        .await;
    assert_eq!(before["data"], 1);

    // Opening the thread returns it in order and flips read status.
    let thread = body_json(get_auth(app.clone(), &base, &token).await).await;
    let rows = thread["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["sender"], "karin");
    assert_eq!(rows[0]["read_status"], true);

    let after = body_json(get_auth(app, &format!("{base}/unread-count"), &token).await).await;
    assert_eq!(after["data"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deltagare_chats_in_own_thread_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let staff = staff_token("karin");
    let id = register_participant(app.clone(), &staff, "Anna").await;
    let other = register_participant(app.clone(), &staff, "Bertil").await;
    let token = deltagare_token(id);

    let own = post_json_auth(
        app.clone(),
        &format!("/api/v1/participants/{id}/messages"),
        &token,
        serde_json::json!({ "text": "Hej!" }),
    )
    .await;
    assert_eq!(own.status(), StatusCode::CREATED);

    let foreign = post_json_auth(
        app,
        &format!("/api/v1/participants/{other}/messages"),
        &token,
        serde_json::json!({ "text": "Hej?" }),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_message_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/participants/{id}/messages"),
        &token,
        serde_json::json!({ "text": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn global_message_listing_is_staff_only(pool: PgPool) {
    let app = common::build_test_app(pool);

    let staff = get_auth(app.clone(), "/api/v1/messages", &staff_token("karin")).await;
    assert_eq!(staff.status(), StatusCode::OK);

    let deltagare = get_auth(app, "/api/v1/messages", &deltagare_token(1)).await;
    assert_eq!(deltagare.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn notes_are_listed_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;
    let base = format!("/api/v1/participants/{id}/notes");

    for content in ["Första anteckningen", "Andra anteckningen"] {
        let response = post_json_auth(
            app.clone(),
            &base,
            &token,
            serde_json::json!({ "content": content }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let latest = body_json(get_auth(app.clone(), &format!("{base}/latest"), &token).await).await;
    assert_eq!(latest["data"]["content"], "Andra anteckningen");
    assert_eq!(latest["data"]["author"], "karin");

    let listing = body_json(get_auth(app, &base, &token).await).await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deltagare_cannot_write_notes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let staff = staff_token("karin");
    let id = register_participant(app.clone(), &staff, "Anna").await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/participants/{id}/notes"),
        &deltagare_token(id),
        serde_json::json!({ "content": "hemligt" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
