//! Integration tests for the reporting queries and account maintenance:
//! - participant overview date-range and status filters
//! - partial account updates via COALESCE

use chrono::{Duration, Utc};
use kompass_db::models::participant::NewParticipant;
use kompass_db::models::user::{NewUser, UpdateUser};
use kompass_db::repositories::{ParticipantRepo, StatisticsRepo, StepRepo, UserRepo};
use sqlx::PgPool;

fn new_participant(first_name: &str) -> NewParticipant {
    NewParticipant {
        first_name: first_name.to_string(),
        last_name: "Testsson".to_string(),
        gender: "man".to_string(),
        education: "gymnasium".to_string(),
        license: None,
        personal_number: "19800315-3456".to_string(),
        address: "Hamngatan 4".to_string(),
        postal_code: "98765".to_string(),
        city: "Trollhättan".to_string(),
        phone_number: "0703333333".to_string(),
        unemployment_time: "2 år".to_string(),
        initiated_by: "Arbetsförmedlingen".to_string(),
    }
}

fn new_user(email: &str, username: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        username: username.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        role: "user".to_string(),
        participant_id: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overview_date_range_filters(pool: PgPool) {
    let anna = ParticipantRepo::create(&pool, &new_participant("Anna"), "karin")
        .await
        .unwrap();
    StepRepo::upsert(&pool, anna.id, 3, "karin").await.unwrap();

    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);
    let tomorrow = today + Duration::days(1);

    // Registered today, so [yesterday, tomorrow] includes her.
    let hits = StatisticsRepo::participant_overview(&pool, Some(yesterday), Some(tomorrow), None)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "Anna");
    assert_eq!(hits[0].step, 3);

    // A range that ends yesterday excludes her.
    let misses = StatisticsRepo::participant_overview(&pool, None, Some(yesterday), None)
        .await
        .unwrap();
    assert!(misses.is_empty());

    // A range that starts tomorrow excludes her too.
    let misses = StatisticsRepo::participant_overview(&pool, Some(tomorrow), None, None)
        .await
        .unwrap();
    assert!(misses.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overview_status_filter(pool: PgPool) {
    let anna = ParticipantRepo::create(&pool, &new_participant("Anna"), "karin")
        .await
        .unwrap();
    let bertil = ParticipantRepo::create(&pool, &new_participant("Bertil"), "karin")
        .await
        .unwrap();
    ParticipantRepo::close(&pool, bertil.id, "Flyttat", "karin")
        .await
        .unwrap()
        .expect("close should succeed");

    let closed = StatisticsRepo::participant_overview(&pool, None, None, Some(true))
        .await
        .unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].id, bertil.id);

    let active = StatisticsRepo::participant_overview(&pool, None, None, Some(false))
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, anna.id);
    // Bertil never saved a step; COALESCE reports 0.
    assert_eq!(closed[0].step, 0);

    let both = StatisticsRepo::participant_overview(&pool, None, None, None)
        .await
        .unwrap();
    assert_eq!(both.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_and_step_counts(pool: PgPool) {
    let anna = ParticipantRepo::create(&pool, &new_participant("Anna"), "karin")
        .await
        .unwrap();
    let bertil = ParticipantRepo::create(&pool, &new_participant("Bertil"), "karin")
        .await
        .unwrap();
    StepRepo::upsert(&pool, anna.id, 2, "karin").await.unwrap();
    StepRepo::upsert(&pool, bertil.id, 2, "karin").await.unwrap();
    ParticipantRepo::close(&pool, bertil.id, "Fått arbete", "karin")
        .await
        .unwrap()
        .expect("close should succeed");

    let counts = StatisticsRepo::summary_counts(&pool).await.unwrap();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.active, 1);
    assert_eq!(counts.closed, 1);

    let per_step = StatisticsRepo::step_counts(&pool).await.unwrap();
    assert_eq!(per_step.len(), 1);
    assert_eq!(per_step[0].step, 2);
    assert_eq!(per_step[0].count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_account_update(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("karin@kommun.se", "karin"))
        .await
        .unwrap();
    assert!(!user.admin);

    let update = UpdateUser {
        email: None,
        username: None,
        role: None,
        admin: Some(true),
    };
    let updated = UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .expect("user should exist");
    assert!(updated.admin);
    assert_eq!(updated.email, "karin@kommun.se");
    assert_eq!(updated.username, "karin");
    assert_eq!(updated.role, "user");

    assert!(UserRepo::update(&pool, 9999, &update).await.unwrap().is_none());
}
