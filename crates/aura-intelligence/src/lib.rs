// ABOUTME: BMI metrics engine for the AURA advisor
// ABOUTME: Classifier, energy estimator, guidance tables, advice sanitizer and progress summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![deny(unsafe_code)]

//! # AURA Intelligence
//!
//! The metrics engine. Every function here is pure and synchronous: it reads a
//! validated [`aura_core::models::Profile`] (or raw numbers) and returns a value
//! without touching shared state, so callers can run it from any task.

/// Reference thresholds and coefficients
pub mod physiological_constants;

/// BMI computation and category classification
pub mod bmi_classifier;

/// BMR, TDEE, target calories and macro split
pub mod energy_estimator;

/// Category-keyed diet plans and tips
pub mod guidance;

/// Cleanup of free-form advice text into tip lines
pub mod advice_text;

/// First-vs-latest progress summary over stored snapshots
pub mod progress;

/// Full health report composed from the engine parts
pub mod report;

pub use advice_text::sanitize_advice_text;
pub use bmi_classifier::{classify, BmiResult, Category};
pub use energy_estimator::{activity_multiplier_for_key, estimate_energy, EnergyResult, Macros};
pub use guidance::{
    plan_for, plan_for_keys, plan_tips, quick_tips, CalorieRange, DietPlan, FoodItem, Meal,
};
pub use progress::{summarize_progress, ProgressDirection, ProgressPoint, ProgressSummary};
pub use report::{analyze_profile, BmiSnapshot, HealthReport};
