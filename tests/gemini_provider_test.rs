// ABOUTME: HTTP contract tests for the Gemini provider against a mock server
// ABOUTME: Verifies request shape, text extraction and error mapping for upstream failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use aura_bmi_server::advice::service::fallback_tips;
use aura_bmi_server::advice::{AdviceRequest, AdviceService, TipSource, TipsOutcome};
use aura_bmi_server::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};
use aura_core::errors::ErrorCode;
use aura_intelligence::Category;
use common::init_test_logging;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new("test-key")
        .with_default_model("gemini-2.5-flash")
        .with_base_url(server.uri())
}

fn simple_request() -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system("You are AURA."),
        ChatMessage::user("Give me tips"),
    ])
    .with_temperature(0.7)
    .with_max_tokens(256)
}

#[tokio::test]
async fn test_successful_completion() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "You are AURA." }] },
            "contents": [{ "role": "user", "parts": [{ "text": "Give me tips" }] }],
            "generationConfig": { "maxOutputTokens": 256, "candidateCount": 1 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "- Eat " }, { "text": "vegetables" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server).complete(&simple_request()).await.unwrap();

    assert_eq!(response.content, "- Eat vegetables");
    assert_eq!(response.model, "gemini-2.5-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.total_tokens, Some(16));
}

#[tokio::test]
async fn test_server_error_maps_to_external_service_error() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Internal error" }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(&simple_request())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("Internal error"));
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(&simple_request())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_malformed_and_empty_bodies_are_errors() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let malformed = provider.complete(&simple_request()).await.unwrap_err();
    assert_eq!(malformed.code, ErrorCode::ExternalServiceError);

    let empty = provider.complete(&simple_request()).await.unwrap_err();
    assert_eq!(empty.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_upstream_500_yields_static_tips_end_to_end() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider: Arc<dyn LlmProvider> = Arc::new(provider_for(&server));
    let service = AdviceService::new(Some(provider), Duration::from_secs(5));
    let request: AdviceRequest = serde_json::from_value(json!({
        "bmi": 27.5,
        "category": "overweight",
        "age": 41,
        "gender": "female",
        "activityLevel": "light"
    }))
    .unwrap();

    match service.tips_for("session-9", &request).await {
        TipsOutcome::Delivered { tips, source } => {
            assert_eq!(source, TipSource::Fallback);
            assert_eq!(tips, fallback_tips(Category::Overweight));
        }
        TipsOutcome::Superseded => panic!("single request cannot be superseded"),
    }
}

#[test]
fn test_provider_reports_configured_model() {
    let provider = GeminiProvider::new("key").with_default_model("gemini-2.0-flash");
    assert_eq!(provider.name(), "Gemini");
    assert_eq!(provider.model(), "gemini-2.0-flash");
}

#[test]
fn test_debug_redacts_api_key() {
    let provider = GeminiProvider::new("super-secret-key");
    let debug = format!("{provider:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("REDACTED"));
}
