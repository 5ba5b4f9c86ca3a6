// ABOUTME: Energy estimator: Mifflin-St Jeor BMR, TDEE, goal-adjusted target, macros
// ABOUTME: Macro grams are rounded once so their calories never exceed the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Energy estimation.
//!
//! The chain is BMR -> TDEE -> target calories -> macro grams. Intermediate
//! values stay unrounded; grams are rounded at the end with carbohydrate as
//! the balancing term, so `protein*4 + carb*4 + fat*9 <= target` always holds.

use aura_core::models::{ActivityLevel, Gender, Goal, Profile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::physiological_constants::{activity_factors, energy_balance, mifflin_st_jeor};

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    /// Protein grams
    pub protein_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
    /// Carbohydrate grams
    pub carb_grams: u32,
}

impl Macros {
    /// Calories represented by these grams
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        f64::from(self.protein_grams) * energy_balance::KCAL_PER_G_PROTEIN
            + f64::from(self.carb_grams) * energy_balance::KCAL_PER_G_CARB
            + f64::from(self.fat_grams) * energy_balance::KCAL_PER_G_FAT
    }
}

/// Energy figures for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Activity factor applied to the BMR
    pub activity_multiplier: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// TDEE plus the goal delta (kcal/day)
    pub target_calories: f64,
    /// Macro split of the target
    pub macros: Macros,
}

/// TDEE factor for an activity level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => activity_factors::SEDENTARY,
        ActivityLevel::Light => activity_factors::LIGHT,
        ActivityLevel::Moderate => activity_factors::MODERATE,
        ActivityLevel::Active => activity_factors::ACTIVE,
        ActivityLevel::VeryActive => activity_factors::VERY_ACTIVE,
    }
}

/// TDEE factor for a raw activity key, `1.0` when the key is unknown
#[must_use]
pub fn activity_multiplier_for_key(key: &str) -> f64 {
    key.parse::<ActivityLevel>().map_or_else(
        |_| {
            debug!(activity = key, "Unknown activity key, using neutral multiplier");
            activity_factors::UNKNOWN
        },
        activity_multiplier,
    )
}

/// Calorie adjustment for a goal
#[must_use]
pub const fn goal_delta(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => energy_balance::LOSE_DELTA_KCAL,
        Goal::Maintain => 0.0,
        Goal::Gain => energy_balance::GAIN_DELTA_KCAL,
    }
}

/// Mifflin-St Jeor basal metabolic rate
///
/// Formula:
/// - Men and other: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age + 5
/// - Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age - 161
#[must_use]
pub fn mifflin_st_jeor_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let constant = match gender {
        Gender::Female => mifflin_st_jeor::FEMALE_CONSTANT,
        Gender::Male | Gender::Other => mifflin_st_jeor::MALE_CONSTANT,
    };

    mifflin_st_jeor::HEIGHT_COEF.mul_add(
        height_cm,
        mifflin_st_jeor::WEIGHT_COEF * weight_kg,
    ) - mifflin_st_jeor::AGE_COEF * f64::from(age_years)
        + constant
}

/// Split a calorie target into macro grams
///
/// Protein is 1.6 g/kg, fat 25% of calories, carbohydrate takes the rest and
/// never goes below zero.
#[must_use]
pub fn split_macros(target_calories: f64, weight_kg: f64) -> Macros {
    let target = target_calories.max(0.0);

    let fat = (energy_balance::FAT_CALORIE_SHARE * target / energy_balance::KCAL_PER_G_FAT).round();
    let protein_room =
        ((target - fat * energy_balance::KCAL_PER_G_FAT).max(0.0) / energy_balance::KCAL_PER_G_PROTEIN)
            .floor();
    let protein = (energy_balance::PROTEIN_G_PER_KG * weight_kg)
        .round()
        .min(protein_room);
    let carb = ((target
        - protein * energy_balance::KCAL_PER_G_PROTEIN
        - fat * energy_balance::KCAL_PER_G_FAT)
        / energy_balance::KCAL_PER_G_CARB)
        .max(0.0)
        .floor();

    Macros {
        protein_grams: protein as u32,
        fat_grams: fat as u32,
        carb_grams: carb as u32,
    }
}

/// Estimate BMR, TDEE, target calories and macros for a profile
#[must_use]
pub fn estimate_energy(profile: &Profile) -> EnergyResult {
    let bmr = mifflin_st_jeor_bmr(
        profile.weight_kg(),
        profile.height_cm(),
        profile.age_years(),
        profile.gender(),
    );
    let multiplier = activity_multiplier(profile.activity_level());
    let tdee = bmr * multiplier;
    let target_calories = tdee + goal_delta(profile.goal());

    EnergyResult {
        bmr,
        activity_multiplier: multiplier,
        tdee,
        target_calories,
        macros: split_macros(target_calories, profile.weight_kg()),
    }
}
