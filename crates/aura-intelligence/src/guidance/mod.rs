// ABOUTME: Category-keyed guidance selector returning static diet plans
// ABOUTME: Scales the plan calorie range by a per-activity factor for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Diet guidance.
//!
//! Each BMI category maps to one static [`DietPlan`]. The plan's calorie range is
//! a reference band scaled by a plan-specific activity factor; it is shown next
//! to, and never replaces, the computed target from the energy estimator.

mod plans;
mod tips;

use aura_core::models::ActivityLevel;
use serde::Serialize;
use tracing::debug;

use crate::bmi_classifier::Category;
use crate::physiological_constants::plan_calorie_factors;

pub use tips::quick_tips;

/// Inclusive calorie band in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

impl CalorieRange {
    fn scaled(self, factor: f64) -> Self {
        Self {
            min: (f64::from(self.min) * factor).round() as u32,
            max: (f64::from(self.max) * factor).round() as u32,
        }
    }
}

/// One food item with approximate macro grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    /// Description including portion
    pub name: &'static str,
    /// Protein grams
    #[serde(rename = "protein")]
    pub protein_g: u16,
    /// Carbohydrate grams
    #[serde(rename = "carbs")]
    pub carbs_g: u16,
    /// Fat grams
    #[serde(rename = "fats")]
    pub fats_g: u16,
}

/// A meal slot in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meal {
    /// Meal name
    pub name: &'static str,
    /// Time-of-day label
    pub time: &'static str,
    /// Approximate meal calories
    pub calories: u32,
    /// Ordered food items
    pub items: &'static [FoodItem],
}

struct PlanTemplate {
    title: &'static str,
    description: &'static str,
    calories: CalorieRange,
    meals: &'static [Meal],
    tips: &'static [&'static str],
}

/// Diet plan selected for a category and activity level
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Category the plan was selected for
    pub category: Category,
    /// Plan title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Unscaled reference band
    pub base_calories: CalorieRange,
    /// Band after the activity factor
    pub adjusted_calories: CalorieRange,
    /// Activity factor applied to the band
    pub calorie_multiplier: f64,
    /// Display label for the adjusted band
    pub calorie_label: String,
    /// Ordered meals
    pub meals: &'static [Meal],
    /// Ordered tips
    pub tips: &'static [&'static str],
}

fn template(category: Category) -> &'static PlanTemplate {
    match category {
        Category::Underweight => &plans::UNDERWEIGHT,
        Category::Normal => &plans::NORMAL,
        Category::Overweight => &plans::OVERWEIGHT,
        Category::Obese => &plans::OBESE,
    }
}

/// Static tips of the plan for a category
///
/// Also used as the fallback when remote advice is unavailable.
#[must_use]
pub fn plan_tips(category: Category) -> &'static [&'static str] {
    template(category).tips
}

/// Factor applied to the plan calorie band for an activity level
#[must_use]
pub const fn plan_calorie_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => plan_calorie_factors::SEDENTARY,
        ActivityLevel::Light => plan_calorie_factors::LIGHT,
        ActivityLevel::Moderate => plan_calorie_factors::MODERATE,
        ActivityLevel::Active => plan_calorie_factors::ACTIVE,
        ActivityLevel::VeryActive => plan_calorie_factors::VERY_ACTIVE,
    }
}

fn build_plan(category: Category, activity_label: &str, factor: f64) -> DietPlan {
    let template = template(category);
    let adjusted = template.calories.scaled(factor);

    DietPlan {
        category,
        title: template.title,
        description: template.description,
        base_calories: template.calories,
        adjusted_calories: adjusted,
        calorie_multiplier: factor,
        calorie_label: format!(
            "{}-{} calories (adjusted for {activity_label} activity)",
            adjusted.min, adjusted.max
        ),
        meals: template.meals,
        tips: template.tips,
    }
}

/// Select the plan for a category, scaled for an activity level
#[must_use]
pub fn plan_for(category: Category, activity_level: ActivityLevel) -> DietPlan {
    build_plan(
        category,
        activity_level.as_str(),
        plan_calorie_factor(activity_level),
    )
}

/// Select a plan from raw stored keys
///
/// An unknown category falls back to the normal plan and an unknown activity
/// key to a factor of `1.0`; the label keeps the key as given.
#[must_use]
pub fn plan_for_keys(category_key: &str, activity_key: &str) -> DietPlan {
    let category = category_key.parse::<Category>().unwrap_or_else(|_| {
        debug!(category = category_key, "Unknown category key, using normal plan");
        Category::Normal
    });

    match activity_key.parse::<ActivityLevel>() {
        Ok(level) => plan_for(category, level),
        Err(_) => {
            debug!(activity = activity_key, "Unknown activity key, plan calories unscaled");
            build_plan(category, activity_key, plan_calorie_factors::UNKNOWN)
        }
    }
}
