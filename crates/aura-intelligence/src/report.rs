// ABOUTME: Composes classifier, energy estimator and guidance into one health report
// ABOUTME: Also defines the flat snapshot handed to persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use aura_core::models::{ActivityLevel, Profile};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::bmi_classifier::{BmiResult, Category};
use crate::energy_estimator::{estimate_energy, EnergyResult};
use crate::guidance::{plan_for, quick_tips, DietPlan};

/// Everything the presentation layer needs for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Profile the report was computed from
    pub profile: Profile,
    /// BMI and category
    pub bmi: BmiResult,
    /// Energy figures and macros
    pub energy: EnergyResult,
    /// Category plan scaled for the activity level
    pub plan: DietPlan,
    /// Short tips for the category
    pub quick_tips: &'static [&'static str],
}

impl HealthReport {
    /// Flat snapshot of this report for storage
    #[must_use]
    pub fn snapshot(&self, recorded_at: DateTime<Utc>) -> BmiSnapshot {
        BmiSnapshot {
            height_cm: self.profile.height_cm(),
            weight_kg: self.profile.weight_kg(),
            bmi: self.bmi.bmi,
            category: self.bmi.category,
            activity_level: self.profile.activity_level(),
            recorded_at,
        }
    }
}

/// Flat record of one BMI computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiSnapshot {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Computed BMI
    pub bmi: f64,
    /// Category at the time
    pub category: Category,
    /// Activity level at the time
    pub activity_level: ActivityLevel,
    /// Computation time
    pub recorded_at: DateTime<Utc>,
}

/// Run the full engine on a validated profile
#[must_use]
pub fn analyze_profile(profile: &Profile) -> HealthReport {
    let bmi = BmiResult::from_profile(profile);
    let energy = estimate_energy(profile);
    debug!(
        bmi = bmi.bmi,
        category = bmi.category.as_str(),
        target_calories = energy.target_calories,
        "Analyzed profile"
    );

    HealthReport {
        profile: *profile,
        bmi,
        energy,
        plan: plan_for(bmi.category, profile.activity_level()),
        quick_tips: quick_tips(bmi.category),
    }
}
