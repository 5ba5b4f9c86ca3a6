// ABOUTME: BMI computation and WHO category classification
// ABOUTME: Always recomputed from height and weight, never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::fmt;
use std::str::FromStr;

use aura_core::errors::{AppError, AppResult};
use aura_core::models::Profile;
use serde::{Deserialize, Serialize};

use crate::physiological_constants::bmi::{
    IDEAL_RANGE_LABEL, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER,
};

/// Health category derived from BMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl Category {
    /// All categories in ascending BMI order
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Classify an already computed BMI
    ///
    /// Bands are half-open: a value equal to a cut-off belongs to the band above.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Storage and lookup key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Ok(Self::Underweight),
            "normal" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "obese" => Ok(Self::Obese),
            _ => Err(AppError::invalid_input(format!("Invalid BMI category: {s}"))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI value with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// kg/m², full precision
    pub bmi: f64,
    /// Category for `bmi`
    pub category: Category,
    /// Healthy range shown next to the value
    pub ideal_range_label: &'static str,
}

impl BmiResult {
    /// Compute for a validated profile
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self::from_bmi(bmi_value(profile.height_cm(), profile.weight_kg()))
    }

    fn from_bmi(bmi: f64) -> Self {
        Self {
            bmi,
            category: Category::from_bmi(bmi),
            ideal_range_label: IDEAL_RANGE_LABEL,
        }
    }
}

fn bmi_value(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Compute BMI and classify it
///
/// Formula: BMI = weight (kg) / height (m)²
///
/// # Errors
///
/// Returns `InvalidInput` when height or weight is not a positive finite number.
pub fn classify(height_cm: f64, weight_kg: f64) -> AppResult<BmiResult> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }

    Ok(BmiResult::from_bmi(bmi_value(height_cm, weight_kg)))
}
