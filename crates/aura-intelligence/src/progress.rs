// ABOUTME: Progress summary comparing the first and latest stored BMI snapshots
// ABOUTME: Reports weight and BMI change and whether BMI moved toward the healthy band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bmi_classifier::Category;
use crate::physiological_constants::bmi::{NORMAL_UPPER, UNDERWEIGHT_UPPER};

/// BMI change smaller than this counts as no movement
const STABLE_BMI_EPSILON: f64 = 0.05;

/// One measurement in a progress series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// BMI at that weight
    pub bmi: f64,
}

/// Movement relative to the healthy BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressDirection {
    /// Closer to (or inside) the healthy band than at the start
    Improving,
    /// No meaningful change in distance to the band
    Stable,
    /// Further from the healthy band than at the start
    Regressing,
}

/// First-vs-latest comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Number of points considered
    pub entries: usize,
    /// Latest weight minus first weight
    pub weight_change_kg: f64,
    /// Latest BMI minus first BMI
    pub bmi_change: f64,
    /// Most recent BMI
    pub latest_bmi: f64,
    /// Category of the most recent BMI
    pub latest_category: Category,
    /// Whole days between the first and latest point
    pub days_tracked: i64,
    /// Movement relative to the healthy band
    pub direction: ProgressDirection,
}

fn distance_from_healthy_band(bmi: f64) -> f64 {
    if bmi < UNDERWEIGHT_UPPER {
        UNDERWEIGHT_UPPER - bmi
    } else if bmi >= NORMAL_UPPER {
        bmi - NORMAL_UPPER
    } else {
        0.0
    }
}

/// Summarize a chronologically ordered series
///
/// Returns `None` when fewer than two points are given.
#[must_use]
pub fn summarize_progress(points: &[ProgressPoint]) -> Option<ProgressSummary> {
    let (first, latest) = match points {
        [first, .., latest] => (first, latest),
        _ => return None,
    };

    let before = distance_from_healthy_band(first.bmi);
    let after = distance_from_healthy_band(latest.bmi);
    let direction = if (after - before).abs() < STABLE_BMI_EPSILON {
        ProgressDirection::Stable
    } else if after < before {
        ProgressDirection::Improving
    } else {
        ProgressDirection::Regressing
    };

    Some(ProgressSummary {
        entries: points.len(),
        weight_change_kg: latest.weight_kg - first.weight_kg,
        bmi_change: latest.bmi - first.bmi,
        latest_bmi: latest.bmi,
        latest_category: Category::from_bmi(latest.bmi),
        days_tracked: (latest.recorded_at - first.recorded_at).num_days(),
        direction,
    })
}
