// ABOUTME: Validated biometric profile and the enums it is built from
// ABOUTME: ProfileInput is the raw JSON shape, Profile the checked immutable value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};

/// Gender used to pick the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed; uses the male constant
    Other,
}

impl Gender {
    /// Get string representation for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Invalid gender: {s}"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or twice-daily training
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Get string representation for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very-active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very-active" | "very_active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(format!(
                "Invalid activity level: {s}"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight goal driving the calorie delta
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lose weight
    Lose,
    /// Keep current weight
    #[default]
    Maintain,
    /// Gain weight
    Gain,
}

impl Goal {
    /// Get string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(AppError::invalid_input(format!("Invalid goal: {s}"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw profile as received over the wire, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Height in centimeters
    #[serde(alias = "heightCm")]
    pub height: f64,
    /// Weight in kilograms
    #[serde(alias = "weightKg")]
    pub weight: f64,
    /// Age in years
    pub age: u32,
    /// Gender key
    pub gender: String,
    /// Activity level key
    pub activity_level: String,
    /// Optional goal key, defaults to maintain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

impl ProfileInput {
    /// Parse enum keys and range-check the numeric fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown gender, activity or goal keys and for
    /// height, weight or age outside the accepted range.
    pub fn validate(&self) -> AppResult<Profile> {
        let gender = self.gender.parse()?;
        let activity_level = self.activity_level.parse()?;
        let goal = match self.goal.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Goal::default(),
        };
        Profile::new(
            self.height,
            self.weight,
            self.age,
            gender,
            activity_level,
            goal,
        )
    }
}

/// Validated, immutable biometric profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    height_cm: f64,
    weight_kg: f64,
    age_years: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: Goal,
}

impl Profile {
    /// Build a profile, enforcing the accepted ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when height, weight or age is outside its
    /// accepted range (non-finite values included).
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: u32,
        gender: Gender,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> AppResult<Self> {
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(AppError::invalid_input(format!(
                "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"
            )));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(AppError::invalid_input(format!(
                "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
            )));
        }
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age_years) {
            return Err(AppError::invalid_input(format!(
                "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"
            )));
        }

        Ok(Self {
            height_cm,
            weight_kg,
            age_years,
            gender,
            activity_level,
            goal,
        })
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Age in years
    #[must_use]
    pub const fn age_years(&self) -> u32 {
        self.age_years
    }

    /// Gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Weight goal
    #[must_use]
    pub const fn goal(&self) -> Goal {
        self.goal
    }
}
