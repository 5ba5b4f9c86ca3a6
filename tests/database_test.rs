// ABOUTME: Integration tests for SQLite persistence of users and BMI records
// ABOUTME: Runs against an in-memory database with the real schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use aura_bmi_server::config::DatabaseUrl;
use aura_bmi_server::database::Database;
use aura_bmi_server::models::NewUser;
use aura_bmi_server::{ActivityLevel, Gender};
use aura_core::errors::ErrorCode;
use aura_intelligence::{BmiSnapshot, Category};
use chrono::{DateTime, Duration, Utc};
use common::{create_test_database, create_test_user};

fn snapshot(weight_kg: f64, recorded_at: DateTime<Utc>) -> BmiSnapshot {
    let bmi = weight_kg / (1.75 * 1.75);
    BmiSnapshot {
        height_cm: 175.0,
        weight_kg,
        bmi,
        category: Category::from_bmi(bmi),
        activity_level: ActivityLevel::Moderate,
        recorded_at,
    }
}

#[tokio::test]
async fn test_create_and_fetch_user() {
    let database = create_test_database().await;
    let user = create_test_user(&database, "ada@example.com").await;

    assert!(user.id > 0);
    let by_id = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "ada@example.com");
    assert_eq!(by_id.gender, Gender::Male);
    assert_eq!(by_id.age, 30);

    let by_email = database
        .get_user_by_email("ADA@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(database.get_user(user.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let database = create_test_database().await;
    create_test_user(&database, "dup@example.com").await;

    let err = database
        .create_user(&NewUser {
            name: "Someone Else".to_owned(),
            email: "dup@example.com".to_owned(),
            age: 50,
            gender: Gender::Female,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.http_status(), 409);
}

#[tokio::test]
async fn test_history_is_newest_first() {
    let database = create_test_database().await;
    let user = create_test_user(&database, "history@example.com").await;
    let start = Utc::now() - Duration::days(30);

    for (day, weight) in [(0, 90.0), (10, 87.5), (20, 85.0)] {
        database
            .create_bmi_record(user.id, &snapshot(weight, start + Duration::days(day)))
            .await
            .unwrap();
    }

    let history = database.get_user_bmi_history(user.id).await.unwrap();
    let weights: Vec<f64> = history.iter().map(|r| r.weight).collect();
    assert_eq!(weights, vec![85.0, 87.5, 90.0]);
    assert!(history.iter().all(|r| r.activity_level == "moderate"));

    let latest = database
        .get_latest_bmi_record(user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, history[0].id);
    assert_eq!(latest.category, Category::from_bmi(85.0 / (1.75 * 1.75)).as_str());
}

#[tokio::test]
async fn test_same_timestamp_orders_by_insertion() {
    let database = create_test_database().await;
    let user = create_test_user(&database, "tie@example.com").await;
    let at = Utc::now();

    let first = database
        .create_bmi_record(user.id, &snapshot(80.0, at))
        .await
        .unwrap();
    let second = database
        .create_bmi_record(user.id, &snapshot(79.0, at))
        .await
        .unwrap();

    let latest = database
        .get_latest_bmi_record(user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, second.id);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_records_are_scoped_per_user() {
    let database = create_test_database().await;
    let alice = create_test_user(&database, "alice@example.com").await;
    let bob = create_test_user(&database, "bob@example.com").await;

    database
        .create_bmi_record(alice.id, &snapshot(60.0, Utc::now()))
        .await
        .unwrap();

    assert_eq!(database.get_user_bmi_history(alice.id).await.unwrap().len(), 1);
    assert!(database.get_user_bmi_history(bob.id).await.unwrap().is_empty());
    assert!(database.get_latest_bmi_record(bob.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_record_for_unknown_user_is_not_found() {
    let database = create_test_database().await;
    let err = database
        .create_bmi_record(999, &snapshot(70.0, Utc::now()))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_timestamps_survive_storage() {
    let database = create_test_database().await;
    let user = create_test_user(&database, "time@example.com").await;
    let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    database
        .create_bmi_record(user.id, &snapshot(70.0, at))
        .await
        .unwrap();
    let stored = database
        .get_latest_bmi_record(user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.created_at, at);
}

#[tokio::test]
async fn test_file_database_creates_parent_directory() {
    common::init_test_logging();
    let dir = std::env::temp_dir().join(format!("aura-db-test-{}", std::process::id()));
    let path = dir.join("nested").join("aura.db");
    let url = DatabaseUrl::SQLite { path: path.clone() };

    let database = Database::new(&url).await.unwrap();
    database.ping().await.unwrap();
    create_test_user(&database, "file@example.com").await;
    assert!(path.exists());

    drop(database);
    std::fs::remove_dir_all(&dir).ok();
}
