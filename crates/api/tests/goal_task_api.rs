//! HTTP-level integration tests for goals and SMART tasks.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, post_json_auth, put_json_auth, register_participant, staff_token,
};
use sqlx::PgPool;

fn goal_body(text: &str, progress: i32) -> serde_json::Value {
    serde_json::json!({
        "goal": text,
        "progress": progress,
        "reflection1": "Går framåt",
        "completionDate": "2026-12-01"
    })
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn goal_saves_and_reads_back(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/participants/{id}/goals"),
        &token,
        goal_body("Hitta praktikplats", 10),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(
        get_auth(app, &format!("/api/v1/participants/{id}/goals"), &token).await,
    )
    .await;
    assert_eq!(json["data"]["goal"], "Hitta praktikplats");
    assert_eq!(json["data"]["progress"], 10);
    assert_eq!(json["data"]["is_completed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unset_goal_reads_as_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let json = body_json(
        get_auth(app, &format!("/api/v1/participants/{id}/goals"), &token).await,
    )
    .await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn goal_progress_out_of_range_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/participants/{id}/goals"),
        &token,
        goal_body("Hitta praktikplats", 120),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resaving_the_same_goal_text_preserves_completion(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;
    let uri = format!("/api/v1/participants/{id}/goals");

    let saved = body_json(
        put_json_auth(app.clone(), &uri, &token, goal_body("Hitta praktikplats", 10)).await,
    )
    .await;
    let goal_id = saved["data"]["id"].as_i64().unwrap();

    let completed = put_json_auth(
        app.clone(),
        &format!("{uri}/{goal_id}/complete"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(completed.status(), StatusCode::OK);

    let resaved = body_json(
        put_json_auth(app, &uri, &token, goal_body("Hitta praktikplats", 50)).await,
    )
    .await;
    assert_eq!(resaved["data"]["is_completed"], true);
    assert_eq!(resaved["data"]["progress"], 50);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn changing_the_goal_text_resets_completion(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;
    let uri = format!("/api/v1/participants/{id}/goals");

    let saved = body_json(
        put_json_auth(app.clone(), &uri, &token, goal_body("Hitta praktikplats", 10)).await,
    )
    .await;
    let goal_id = saved["data"]["id"].as_i64().unwrap();

    put_json_auth(
        app.clone(),
        &format!("{uri}/{goal_id}/complete"),
        &token,
        serde_json::json!({}),
    )
    .await;

    let resaved = body_json(
        put_json_auth(app, &uri, &token, goal_body("Starta eget", 0)).await,
    )
    .await;
    assert_eq!(resaved["data"]["goal"], "Starta eget");
    assert_eq!(resaved["data"]["is_completed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn progress_update_does_not_touch_completion(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;
    let uri = format!("/api/v1/participants/{id}/goals");

    put_json_auth(app.clone(), &uri, &token, goal_body("Hitta praktikplats", 10)).await;

    let response = put_json_auth(
        app,
        &format!("{uri}/progress"),
        &token,
        serde_json::json!({ "progress": 70 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["progress"], 70);
    assert_eq!(json["data"]["is_completed"], false);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn task_create_and_list_by_participant(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/tasks",
        &token,
        serde_json::json!({
            "participantId": id,
            "specific": "Skriv CV",
            "measurable": "Ett färdigt CV",
            "timeBound": "Inom två veckor"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(
        get_auth(app, &format!("/api/v1/participants/{id}/tasks"), &token).await,
    )
    .await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["specific"], "Skriv CV");
    assert_eq!(rows[0]["progress"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn task_without_specific_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let response = post_json_auth(
        app,
        "/api/v1/tasks",
        &token,
        serde_json::json!({ "participantId": id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_a_task_sets_progress_to_full(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/tasks",
            &token,
            serde_json::json!({ "participantId": id, "specific": "Skriv CV" }),
        )
        .await,
    )
    .await;
    let task_id = created["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/api/v1/tasks/{task_id}/complete"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_completed"], true);
    assert_eq!(json["data"]["progress"], 100);
    assert!(json["data"]["completed_at"].is_string());
}
