// ABOUTME: End-to-end HTTP tests for the AURA router using in-memory resources
// ABOUTME: Exercises user, BMI, report, progress, advice and health endpoints through tower oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use aura_bmi_server::resources::ServerResources;
use aura_bmi_server::server::build_router;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use common::{create_test_resources, offline_advice, scripted_advice, Script, ScriptedProvider};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(
    resources: &Arc<ServerResources>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(Arc::clone(resources))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn register(resources: &Arc<ServerResources>, email: &str) -> i64 {
    let (status, body) = send(
        resources,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Sam", "email": email, "age": 30, "gender": "male" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health_and_ready() {
    let resources = create_test_resources(offline_advice()).await;

    let (status, body) = send(&resources, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&resources, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["remoteAdvice"], false);
}

#[tokio::test]
async fn test_user_registration_and_lookup() {
    let resources = create_test_resources(offline_advice()).await;
    let id = register(&resources, "sam@example.com").await;

    let (status, body) = send(
        &resources,
        Method::GET,
        "/api/users/by-email/sam@example.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["gender"], "male");
    assert!(body["createdAt"].is_string());

    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Sam", "email": "sam@example.com", "age": 30, "gender": "male" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");

    let (status, _) = send(
        &resources,
        Method::GET,
        "/api/users/by-email/nobody@example.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_registration_is_bad_request() {
    let resources = create_test_resources(offline_advice()).await;
    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Sam", "email": "nope", "age": 30, "gender": "male" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_calculate_stores_record_and_returns_plan() {
    let resources = create_test_resources(offline_advice()).await;
    let user_id = register(&resources, "calc@example.com").await;

    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/bmi/calculate",
        Some(json!({
            "userId": user_id,
            "height": 180.0,
            "weight": 95.0,
            "activityLevel": "moderate"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["bmiRecord"]["category"], "overweight");
    assert_eq!(body["bmiRecord"]["userId"], user_id);
    assert_eq!(body["dietPlan"]["title"], "Weight Loss Diet Plan");
    assert_eq!(
        body["dietPlan"]["calorieLabel"],
        "1800-2160 calories (adjusted for moderate activity)"
    );
    // Age and gender come from the stored user: male, 30
    let bmr = body["energy"]["bmr"].as_f64().unwrap();
    assert!((bmr - 1930.0).abs() < 1e-9);
    assert_eq!(body["quickTips"].as_array().unwrap().len(), 4);

    let (status, body) = send(
        &resources,
        Method::GET,
        &format!("/api/bmi/latest/{user_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmiRecord"]["weight"], 95.0);
    assert_eq!(body["dietPlan"]["category"], "overweight");
}

#[tokio::test]
async fn test_calculate_rejects_out_of_range_and_unknown_user() {
    let resources = create_test_resources(offline_advice()).await;
    let user_id = register(&resources, "range@example.com").await;

    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/bmi/calculate",
        Some(json!({ "userId": user_id, "height": 20.0, "weight": 70.0, "activityLevel": "light" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, _) = send(
        &resources,
        Method::POST,
        "/api/bmi/calculate",
        Some(json!({ "userId": 4242, "height": 170.0, "weight": 70.0, "activityLevel": "light" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &resources,
        Method::GET,
        &format!("/api/bmi/latest/{user_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_and_progress() {
    let resources = create_test_resources(offline_advice()).await;
    let user_id = register(&resources, "progress@example.com").await;

    for weight in [95.0, 92.0, 89.0] {
        let (status, _) = send(
            &resources,
            Method::POST,
            "/api/bmi/calculate",
            Some(json!({
                "userId": user_id,
                "height": 180.0,
                "weight": weight,
                "activityLevel": "active",
                "goal": "lose"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (status, body) = send(
        &resources,
        Method::GET,
        &format!("/api/bmi/history/{user_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let weights: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["weight"].as_f64().unwrap())
        .collect();
    assert_eq!(weights, vec![89.0, 92.0, 95.0]);

    let (status, body) = send(
        &resources,
        Method::GET,
        &format!("/api/bmi/progress/{user_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"], 3);
    assert_eq!(body["summary"]["weightChangeKg"], -6.0);
    assert_eq!(body["summary"]["direction"], "improving");
}

#[tokio::test]
async fn test_progress_without_enough_records() {
    let resources = create_test_resources(offline_advice()).await;
    let user_id = register(&resources, "lonely@example.com").await;

    let (status, body) = send(
        &resources,
        Method::GET,
        &format!("/api/bmi/progress/{user_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"], 0);
    assert!(body["summary"].is_null());
}

#[tokio::test]
async fn test_stateless_report() {
    let resources = create_test_resources(offline_advice()).await;
    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/bmi/report",
        Some(json!({
            "height": 175.0,
            "weight": 70.0,
            "age": 30,
            "gender": "male",
            "activityLevel": "moderate"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"]["category"], "normal");
    let tdee = body["energy"]["tdee"].as_f64().unwrap();
    assert!((tdee - 2555.5625).abs() < 1e-9);

    let (status, _) = send(
        &resources,
        Method::POST,
        "/api/bmi/report",
        Some(json!({
            "height": 175.0,
            "weight": 70.0,
            "age": 30,
            "gender": "robot",
            "activityLevel": "moderate"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_diet_advice_without_key() {
    let resources = create_test_resources(offline_advice()).await;
    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/ai/diet-advice",
        Some(json!({ "bmi": 24.2, "category": "normal" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Advice unavailable right now.");
}

#[tokio::test]
async fn test_diet_advice_provider_failure_is_bad_gateway() {
    let advice = scripted_advice(
        ScriptedProvider::new(Script::ServerError),
        Duration::from_secs(1),
    );
    let resources = create_test_resources(advice).await;
    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/ai/diet-advice",
        Some(json!({ "bmi": 31.0, "category": "obese", "age": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_tips_never_fail_for_remote_reasons() {
    let advice = scripted_advice(
        ScriptedProvider::new(Script::ServerError),
        Duration::from_secs(1),
    );
    let resources = create_test_resources(advice).await;
    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/ai/tips",
        Some(json!({ "subject": "session-1", "bmi": 17.2, "category": "underweight" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["superseded"], false);
    assert!(!body["tips"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_tips_without_subject_both_answer() {
    let advice = scripted_advice(
        ScriptedProvider::new(Script::Delayed(
            Duration::from_millis(150),
            "- Remote tip".to_owned(),
        )),
        Duration::from_secs(2),
    );
    let resources = create_test_resources(advice).await;

    let ((first_status, first), (second_status, second)) = tokio::join!(
        send(
            &resources,
            Method::POST,
            "/api/ai/tips",
            Some(json!({ "bmi": 31.2, "category": "obese" })),
        ),
        async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            send(
                &resources,
                Method::POST,
                "/api/ai/tips",
                Some(json!({ "bmi": 17.0, "category": "underweight" })),
            )
            .await
        }
    );

    for (status, body) in [(first_status, first), (second_status, second)] {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["superseded"], false);
        assert_eq!(body["source"], "remote");
        assert_eq!(body["tips"], json!(["Remote tip"]));
    }
}

#[tokio::test]
async fn test_tips_reject_missing_bmi() {
    let resources = create_test_resources(offline_advice()).await;
    let (status, body) = send(
        &resources,
        Method::POST,
        "/api/ai/tips",
        Some(json!({ "bmi": -3.0, "category": "normal" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}
