// ABOUTME: Remote diet advice: request assembly, coach prompts, service and sequencing
// ABOUTME: Remote text is optional; failures fall back to static plan tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! # Advice
//!
//! Builds the flat advice payload from engine output, turns it into a coach
//! prompt, and calls the configured [`crate::llm::LlmProvider`]. Tip requests
//! never fail for remote reasons: the static plan tips stand in, and responses
//! that lost a race with a newer request for the same subject are dropped.

/// Coach prompt construction
pub mod prompts;
/// Advice service with timeout and fallback
pub mod service;
/// Last-request-wins ticketing per subject
pub mod sequencer;

pub use sequencer::{AdviceSequencer, RequestTicket};
pub use service::{AdviceService, TipSource, TipsOutcome};

use aura_core::models::Profile;
use aura_intelligence::{BmiResult, Category};
use serde::{Deserialize, Serialize};

/// A past BMI reading quoted in the prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Free-form date label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// BMI on that date
    pub bmi: f64,
}

/// Flat payload sent to text generation
///
/// Only `bmi` and `category` are required; the rest enrich the prompt when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// Category key or label
    pub category: String,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Activity level key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Weight goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Earlier readings, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
    /// Advice given last time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_advice: Option<String>,
    /// Dietary preference (vegetarian, vegan, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
}

/// Round to one decimal place
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl AdviceRequest {
    /// Assemble the payload from a validated profile and its BMI result
    #[must_use]
    pub fn from_profile(profile: &Profile, bmi: &BmiResult) -> Self {
        Self {
            bmi: round_one_decimal(bmi.bmi),
            category: bmi.category.as_str().to_owned(),
            age: Some(profile.age_years()),
            gender: Some(profile.gender().as_str().to_owned()),
            activity_level: Some(profile.activity_level().as_str().to_owned()),
            name: None,
            height: Some(profile.height_cm()),
            weight: Some(profile.weight_kg()),
            goal: Some(profile.goal().as_str().to_owned()),
            history: Vec::new(),
            last_advice: None,
            diet_type: None,
        }
    }

    /// Category for fallback tips
    ///
    /// Uses the category key when it parses, otherwise classifies `bmi`.
    #[must_use]
    pub fn resolved_category(&self) -> Category {
        self.category
            .parse()
            .unwrap_or_else(|_| Category::from_bmi(self.bmi))
    }
}
