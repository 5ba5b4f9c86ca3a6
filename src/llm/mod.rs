// ABOUTME: LLM provider abstraction for the remote text-generation call
// ABOUTME: Defines prompt message types and the async provider contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! # LLM Provider Interface
//!
//! The advice service reaches text generation only through [`LlmProvider`].
//! Gemini is the production implementation; tests plug in scripted fakes.
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use aura_bmi_server::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a friendly nutrition coach."),
//!         ChatMessage::user("Suggest a high-protein breakfast."),
//!     ]);
//!     let response = provider.complete(&request).await;
//! }
//! ```

/// Google Gemini provider
pub mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Who a prompt message speaks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Coaching persona and rules
    System,
    /// The advice request itself
    User,
}

/// One message of an advice prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker
    pub role: MessageRole,
    /// Text
    pub content: String,
}

impl ChatMessage {
    /// Persona message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Request message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Prompt plus sampling settings; the provider picks the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Prompt messages in order
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Output cap in tokens
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Request with default sampling
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the output cap
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Generated text and what the provider reported about it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Raw generated text, not yet sanitized
    pub content: String,
    /// Model that answered
    pub model: String,
    /// Why generation stopped, e.g. `STOP` or `MAX_TOKENS`
    pub finish_reason: Option<String>,
    /// Prompt plus completion tokens, when reported
    pub total_tokens: Option<u32>,
}

/// Remote text generation used by the advice service
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Model requests are sent to
    fn model(&self) -> &str;

    /// Generate text for a prompt
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
