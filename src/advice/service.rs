// ABOUTME: Advice service wrapping the LLM provider with timeout and static fallback
// ABOUTME: Diet advice surfaces provider errors; tip requests never fail for remote reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::sync::Arc;
use std::time::Duration;

use aura_core::constants::advice::ADVICE_UNAVAILABLE;
use aura_intelligence::{plan_tips, sanitize_advice_text, Category};
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::prompts::{diet_advice_prompt, quick_tips_prompt, COACH_SYSTEM_PROMPT};
use super::{AdviceRequest, AdviceSequencer};
use crate::config::AdviceConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Where a tip list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipSource {
    /// Sanitized remote text
    Remote,
    /// Static plan tips
    Fallback,
}

/// Result of a tip request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipsOutcome {
    /// Tips to show
    Delivered {
        /// Tip lines
        tips: Vec<String>,
        /// Origin of the tips
        source: TipSource,
    },
    /// A newer request for the same subject started; discard this result
    Superseded,
}

/// Remote advice with graceful degradation
pub struct AdviceService {
    provider: Option<Arc<dyn LlmProvider>>,
    timeout: Duration,
    sequencer: AdviceSequencer,
}

impl AdviceService {
    /// Create a service around an optional provider
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            sequencer: AdviceSequencer::new(),
        }
    }

    /// Build from configuration; remote advice is disabled without an API key
    #[must_use]
    pub fn from_config(config: &AdviceConfig) -> Self {
        let provider = config.gemini_api_key.as_ref().map(|key| {
            let gemini = GeminiProvider::new(key.clone())
                .with_default_model(config.model.clone())
                .with_base_url(config.base_url.clone());
            Arc::new(gemini) as Arc<dyn LlmProvider>
        });

        match &provider {
            Some(provider) => info!(
                provider = provider.name(),
                model = provider.model(),
                "Remote advice enabled"
            ),
            None => info!("Remote advice disabled, static tips only"),
        }
        Self::new(provider, config.timeout())
    }

    /// Whether a remote provider is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    async fn generate(&self, provider: &dyn LlmProvider, prompt: String) -> AppResult<String> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(COACH_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_OUTPUT_TOKENS);

        let response = timeout(self.timeout, provider.complete(&request))
            .await
            .map_err(|_| {
                AppError::external_unavailable(
                    provider.name(),
                    format!("no response within {}s", self.timeout.as_secs()),
                )
            })??;

        debug!(
            provider = provider.name(),
            model = %response.model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            total_tokens = response.total_tokens,
            "Remote advice received"
        );
        Ok(response.content)
    }

    /// Free-form coaching text
    ///
    /// Returns the fixed "unavailable" text when no provider is configured.
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the provider fails or times out
    pub async fn diet_advice(&self, request: &AdviceRequest) -> AppResult<String> {
        let Some(provider) = self.provider.as_deref() else {
            return Ok(ADVICE_UNAVAILABLE.to_owned());
        };
        self.generate(provider, diet_advice_prompt(request)).await
    }

    async fn remote_tips(&self, request: &AdviceRequest) -> Option<Vec<String>> {
        let provider = self.provider.as_deref()?;
        match self.generate(provider, quick_tips_prompt(request)).await {
            Ok(text) => {
                let tips = sanitize_advice_text(&text);
                if tips.is_empty() {
                    warn!("Remote advice had no usable lines, using static tips");
                    None
                } else {
                    Some(tips)
                }
            }
            Err(e) => {
                warn!(error = %e, "Remote advice failed, using static tips");
                None
            }
        }
    }

    /// Remote tips, or the static plan tips on any remote failure
    async fn resolve_tips(&self, request: &AdviceRequest) -> (Vec<String>, TipSource) {
        let category: Category = request.resolved_category();
        self.remote_tips(request).await.map_or_else(
            || (fallback_tips(category), TipSource::Fallback),
            |tips| (tips, TipSource::Remote),
        )
    }

    /// Tip lines for a request that belongs to no subject
    ///
    /// Requests without a subject never supersede each other, so the result is
    /// always delivered.
    pub async fn tips(&self, request: &AdviceRequest) -> TipsOutcome {
        let (tips, source) = self.resolve_tips(request).await;
        TipsOutcome::Delivered { tips, source }
    }

    /// Tip lines for a subject, newest request wins
    ///
    /// Any remote failure (missing key, transport error, bad status, malformed
    /// or empty text, timeout) yields the static plan tips for the category.
    pub async fn tips_for(&self, subject: &str, request: &AdviceRequest) -> TipsOutcome {
        let ticket = self.sequencer.begin(subject);
        let (tips, source) = self.resolve_tips(request).await;

        if !self.sequencer.complete(&ticket) {
            debug!(
                subject,
                sequence = ticket.sequence(),
                in_flight = self.sequencer.in_flight(),
                "Discarding superseded advice"
            );
            return TipsOutcome::Superseded;
        }

        TipsOutcome::Delivered { tips, source }
    }
}

/// Static plan tips as owned strings
#[must_use]
pub fn fallback_tips(category: Category) -> Vec<String> {
    plan_tips(category)
        .iter()
        .map(|tip| (*tip).to_owned())
        .collect()
}
