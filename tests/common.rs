// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, in-memory databases, scripted LLM providers and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `aura_bmi_server`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use aura_bmi_server::{
    advice::AdviceService,
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    errors::{AppError, AppResult},
    llm::{ChatRequest, ChatResponse, LlmProvider},
    models::{NewUser, User},
    resources::ServerResources,
    Gender,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory)
        .await
        .expect("in-memory database")
}

/// Insert a user with fixed demographics
pub async fn create_test_user(database: &Database, email: &str) -> User {
    database
        .create_user(&NewUser {
            name: "Test User".to_owned(),
            email: email.to_owned(),
            age: 30,
            gender: Gender::Male,
        })
        .await
        .expect("create user")
}

/// Resources over an in-memory database and the given advice service
pub async fn create_test_resources(advice: AdviceService) -> Arc<ServerResources> {
    let database = create_test_database().await;
    let config = ServerConfig {
        database_url: DatabaseUrl::Memory,
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::new(database, advice, config))
}

/// Advice service with remote advice disabled
pub fn offline_advice() -> AdviceService {
    AdviceService::new(None, Duration::from_secs(1))
}

/// What a [`ScriptedProvider`] does on each call
#[derive(Clone)]
pub enum Script {
    /// Return this text
    Reply(String),
    /// Fail with an upstream 500
    ServerError,
    /// Sleep before replying
    Delayed(Duration, String),
}

/// LLM provider that follows a fixed script and counts calls
pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "Scripted Provider"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let content = match &self.script {
            Script::Reply(text) => text.clone(),
            Script::ServerError => {
                return Err(AppError::external_service(
                    "Scripted Provider",
                    "API error (500): internal",
                ))
            }
            Script::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                text.clone()
            }
        };

        Ok(ChatResponse {
            content,
            model: "scripted-model".to_owned(),
            finish_reason: Some("STOP".to_owned()),
            total_tokens: None,
        })
    }
}

/// Advice service backed by a scripted provider
pub fn scripted_advice(provider: Arc<ScriptedProvider>, timeout: Duration) -> AdviceService {
    AdviceService::new(Some(provider as Arc<dyn LlmProvider>), timeout)
}
