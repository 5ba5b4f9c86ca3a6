// ABOUTME: Persisted data models for users and stored BMI records
// ABOUTME: Includes request validation for account creation and record-to-engine conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! # Data Models
//!
//! Rows stored by [`crate::database::Database`] and the request bodies that
//! create them. Engine value types (`Profile`, `BmiResult`, `DietPlan`) live in
//! the `aura-core` and `aura-intelligence` crates; the types here only add what
//! persistence needs: identifiers, ownership and timestamps.

use aura_core::constants::limits::{MAX_AGE_YEARS, MIN_AGE_YEARS};
use aura_core::errors::{AppError, AppResult};
use aura_core::models::Gender;
use aura_intelligence::{plan_for_keys, DietPlan, ProgressPoint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Row identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unique email address
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Account creation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Gender key
    pub gender: String,
}

/// Validated account data ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Trimmed display name
    pub name: String,
    /// Trimmed, lowercased email
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
}

impl CreateUserRequest {
    /// Validate and normalize the request
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name, a malformed email, an unknown
    /// gender key or an age outside the accepted range.
    pub fn validate(&self) -> AppResult<NewUser> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Name is required"));
        }

        let email = self.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }

        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&self.age) {
            return Err(AppError::invalid_input(format!(
                "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"
            )));
        }

        Ok(NewUser {
            name: name.to_owned(),
            email,
            age: self.age,
            gender: self.gender.parse()?,
        })
    }
}

/// Minimal structural email check: something before `@` and a dotted domain
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Stored BMI snapshot
///
/// `category` and `activity_level` are kept as raw keys so that rows written by
/// older clients stay readable; lookups against them go through the fallback
/// resolvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiRecord {
    /// Row identifier
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// BMI at the time
    pub bmi: f64,
    /// Category key
    pub category: String,
    /// Activity level key
    pub activity_level: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl BmiRecord {
    /// Diet plan for this record's stored keys
    #[must_use]
    pub fn diet_plan(&self) -> DietPlan {
        plan_for_keys(&self.category, &self.activity_level)
    }

    /// Point for the progress summary
    #[must_use]
    pub const fn progress_point(&self) -> ProgressPoint {
        ProgressPoint {
            recorded_at: self.created_at,
            weight_kg: self.weight,
            bmi: self.bmi,
        }
    }
}
