// ABOUTME: Reference constants for BMI bands, Mifflin-St Jeor and activity factors
// ABOUTME: Grouped by domain so every engine module reads the same numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Physiological constants used by the metrics engine.

/// BMI category cut-offs for adults
///
/// References:
/// - World Health Organization. Body mass index classification
/// - <https://www.who.int/data/gho/data/themes/topics/topic-details/GHO/body-mass-index>
pub mod bmi {
    /// Below this value the category is underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this value (and at or above underweight) the category is normal
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this value the category is overweight; at or above it, obese
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
    /// Display label for the healthy range
    pub const IDEAL_RANGE_LABEL: &str = "18.5 - 24.9";
}

/// Mifflin-St Jeor resting energy coefficients
///
/// Reference: Mifflin, M.D. et al. (1990). A new predictive equation for resting
/// energy expenditure in healthy individuals. Am J Clin Nutr 51(2):241-247
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = 5.0;
    /// Constant for male (and other)
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Constant for female
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity factors
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise
    pub const ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
    /// Used when an activity key is not recognised
    pub const UNKNOWN: f64 = 1.0;
}

/// Multipliers applied to the static plan calorie ranges
///
/// Independent of the TDEE factors above.
pub mod plan_calorie_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.0;
    /// Light exercise
    pub const LIGHT: f64 = 1.1;
    /// Moderate exercise
    pub const MODERATE: f64 = 1.2;
    /// Hard exercise
    pub const ACTIVE: f64 = 1.3;
    /// Very hard exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.4;
    /// Used when an activity key is not recognised
    pub const UNKNOWN: f64 = 1.0;
}

/// Goal adjustments and macro ratios
pub mod energy_balance {
    /// kcal removed from TDEE for a weight-loss goal
    pub const LOSE_DELTA_KCAL: f64 = -500.0;
    /// kcal added to TDEE for a weight-gain goal
    pub const GAIN_DELTA_KCAL: f64 = 300.0;
    /// Protein grams per kg of body weight
    pub const PROTEIN_G_PER_KG: f64 = 1.6;
    /// Share of target calories coming from fat
    pub const FAT_CALORIE_SHARE: f64 = 0.25;
    /// kcal per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_G_CARB: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}
