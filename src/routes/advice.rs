// ABOUTME: Text-generation advice routes: free-form diet advice and sanitized tips
// ABOUTME: Tips always answer; diet advice reports provider failures as 502
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::advice::{AdviceRequest, TipSource, TipsOutcome};
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;

/// Response of POST /api/ai/diet-advice
#[derive(Debug, Serialize, Deserialize)]
pub struct DietAdviceResponse {
    /// Generated advice text
    pub text: String,
}

/// Body of POST /api/ai/tips
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsRequest {
    /// Session or user key used to order concurrent requests; requests
    /// without one are answered independently
    #[serde(default)]
    pub subject: Option<String>,
    /// Advice payload
    #[serde(flatten)]
    pub advice: AdviceRequest,
}

/// Response of POST /api/ai/tips
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsResponse {
    /// Tip lines, empty when superseded
    pub tips: Vec<String>,
    /// Origin of the tips, absent when superseded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TipSource>,
    /// A newer request for the same subject replaced this one
    pub superseded: bool,
}

impl From<TipsOutcome> for TipsResponse {
    fn from(outcome: TipsOutcome) -> Self {
        match outcome {
            TipsOutcome::Delivered { tips, source } => Self {
                tips,
                source: Some(source),
                superseded: false,
            },
            TipsOutcome::Superseded => Self {
                tips: Vec::new(),
                source: None,
                superseded: true,
            },
        }
    }
}

/// Advice routes
pub struct AdviceRoutes;

impl AdviceRoutes {
    /// Create all advice routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai/diet-advice", post(Self::handle_diet_advice))
            .route("/api/ai/tips", post(Self::handle_tips))
            .with_state(resources)
    }

    fn check_bmi(request: &AdviceRequest) -> AppResult<()> {
        if request.bmi.is_finite() && request.bmi > 0.0 {
            Ok(())
        } else {
            Err(AppError::invalid_input("BMI must be a positive number"))
        }
    }

    /// Handle POST /api/ai/diet-advice
    async fn handle_diet_advice(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<AdviceRequest>,
    ) -> Result<Json<DietAdviceResponse>, AppError> {
        Self::check_bmi(&body)?;
        let text = resources.advice.diet_advice(&body).await?;
        Ok(Json(DietAdviceResponse { text }))
    }

    /// Handle POST /api/ai/tips
    async fn handle_tips(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<TipsRequest>,
    ) -> Result<Json<TipsResponse>, AppError> {
        Self::check_bmi(&body.advice)?;
        let subject = body.subject.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let outcome = match subject {
            Some(subject) => resources.advice.tips_for(subject, &body.advice).await,
            None => resources.advice.tips(&body.advice).await,
        };
        Ok(Json(outcome.into()))
    }
}
