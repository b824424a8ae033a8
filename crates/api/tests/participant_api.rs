//! HTTP-level integration tests for the participant registry: registration,
//! creator-scoped listing, point reads, and the one-way close transition.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, deltagare_token, get_auth, participant_payload, post_json_auth, put_json_auth,
    register_participant, staff_token,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_created_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");

    let response = post_json_auth(
        app,
        "/api/v1/participants",
        &token,
        participant_payload("Anna", "19900101-1234"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["first_name"], "Anna");
    assert_eq!(json["data"]["created_by"], "karin");
    assert_eq!(json["data"]["avslutad"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_missing_field_names_it(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");

    let mut payload = participant_payload("Anna", "19900101-1234");
    payload.as_object_mut().unwrap().remove("educationLevel");

    let response = post_json_auth(app, "/api/v1/participants", &token, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("educationLevel"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app,
        "/api/v1/participants",
        participant_payload("Anna", "19900101-1234"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_is_scoped_to_the_creator(pool: PgPool) {
    let app = common::build_test_app(pool);
    let karin = staff_token("karin");
    let erik = staff_token("erik");

    register_participant(app.clone(), &karin, "Anna").await;
    register_participant(app.clone(), &erik, "Bertil").await;

    let response = get_auth(app, "/api/v1/participants", &karin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Anna");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn closed_participants_drop_out_of_the_listing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");

    let id = register_participant(app.clone(), &token, "Anna").await;
    register_participant(app.clone(), &token, "Bertil").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/participants/{id}/close"),
        &token,
        serde_json::json!({ "reason": "Fått arbete" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get_auth(app, "/api/v1/participants", &token).await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Bertil");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn close_records_reason_actor_and_timestamp(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/participants/{id}/close"),
        &token,
        serde_json::json!({ "reason": "Fått arbete" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["avslutad"], true);
    assert_eq!(json["data"]["avslutsorsak"], "Fått arbete");
    assert_eq!(json["data"]["avslutad_av"], "karin");
    assert!(json["data"]["avslutad_datum"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn closing_twice_is_a_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");
    let id = register_participant(app.clone(), &token, "Anna").await;

    let first = put_json_auth(
        app.clone(),
        &format!("/api/v1/participants/{id}/close"),
        &token,
        serde_json::json!({ "reason": "Fått arbete" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = put_json_auth(
        app,
        &format!("/api/v1/participants/{id}/close"),
        &token,
        serde_json::json!({ "reason": "Igen" }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn closing_unknown_participant_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = staff_token("karin");

    let response = put_json_auth(
        app,
        "/api/v1/participants/9999/close",
        &token,
        serde_json::json!({ "reason": "x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn point_read_is_creator_scoped_for_staff(pool: PgPool) {
    let app = common::build_test_app(pool);
    let karin = staff_token("karin");
    let erik = staff_token("erik");
    let id = register_participant(app.clone(), &karin, "Anna").await;

    let own = get_auth(app.clone(), &format!("/api/v1/participants/{id}"), &karin).await;
    assert_eq!(own.status(), StatusCode::OK);

    let foreign = get_auth(app, &format!("/api/v1/participants/{id}"), &erik).await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deltagare_reads_own_record_but_not_others(pool: PgPool) {
    let app = common::build_test_app(pool);
    let staff = staff_token("karin");
    let id = register_participant(app.clone(), &staff, "Anna").await;
    let other_id = register_participant(app.clone(), &staff, "Bertil").await;

    let token = deltagare_token(id);

    let own = get_auth(app.clone(), &format!("/api/v1/participants/{id}"), &token).await;
    assert_eq!(own.status(), StatusCode::OK);

    let foreign = get_auth(app, &format!("/api/v1/participants/{other_id}"), &token).await;
    assert_eq!(foreign.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deltagare_cannot_register_participants(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = deltagare_token(1);

    let response = post_json_auth(
        app,
        "/api/v1/participants",
        &token,
        participant_payload("Anna", "19900101-1234"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
