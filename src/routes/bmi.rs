// ABOUTME: BMI routes: calculate-and-store, history, latest, progress and stateless report
// ABOUTME: The engine computes BMI and category server-side from the submitted profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! BMI routes
//!
//! `calculate` fills missing age and gender from the stored user, runs the
//! metrics engine, and stores a flat snapshot. Reads of stored records go
//! through the lenient key lookups so old rows still get a plan.

use std::sync::Arc;

use aura_core::models::ProfileInput;
use aura_intelligence::{
    analyze_profile, summarize_progress, DietPlan, EnergyResult, HealthReport, ProgressPoint,
    ProgressSummary,
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::BmiRecord;
use crate::resources::ServerResources;

/// Body of POST /api/bmi/calculate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBmiRequest {
    /// Owner of the new record
    pub user_id: i64,
    /// Height in centimeters
    #[serde(alias = "heightCm")]
    pub height: f64,
    /// Weight in kilograms
    #[serde(alias = "weightKg")]
    pub weight: f64,
    /// Activity level key
    pub activity_level: String,
    /// Goal key, defaults to maintain
    #[serde(default)]
    pub goal: Option<String>,
    /// Age override, defaults to the stored age
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender override, defaults to the stored gender
    #[serde(default)]
    pub gender: Option<String>,
}

/// Response of POST /api/bmi/calculate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBmiResponse {
    /// Stored snapshot
    pub bmi_record: BmiRecord,
    /// Plan for the computed category
    pub diet_plan: DietPlan,
    /// Energy figures and macros
    pub energy: EnergyResult,
    /// Short tips for the category
    pub quick_tips: &'static [&'static str],
}

/// Response of GET /api/bmi/latest/:user_id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBmiResponse {
    /// Most recent snapshot
    pub bmi_record: BmiRecord,
    /// Plan for the stored category and activity keys
    pub diet_plan: DietPlan,
}

/// Response of GET /api/bmi/progress/:user_id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    /// User the series belongs to
    pub user_id: i64,
    /// Stored records considered
    pub entries: usize,
    /// First-vs-latest comparison, absent with fewer than two records
    pub summary: Option<ProgressSummary>,
}

/// BMI routes
pub struct BmiRoutes;

impl BmiRoutes {
    /// Create all BMI routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/bmi/calculate", post(Self::handle_calculate))
            .route("/api/bmi/history/:user_id", get(Self::handle_history))
            .route("/api/bmi/latest/:user_id", get(Self::handle_latest))
            .route("/api/bmi/progress/:user_id", get(Self::handle_progress))
            .route("/api/bmi/report", post(Self::handle_report))
            .with_state(resources)
    }

    /// Handle POST /api/bmi/calculate
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CalculateBmiRequest>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user(body.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let profile = ProfileInput {
            height: body.height,
            weight: body.weight,
            age: body.age.unwrap_or(user.age),
            gender: body
                .gender
                .unwrap_or_else(|| user.gender.as_str().to_owned()),
            activity_level: body.activity_level,
            goal: body.goal,
        }
        .validate()?;

        let report = analyze_profile(&profile);
        let bmi_record = resources
            .database
            .create_bmi_record(user.id, &report.snapshot(Utc::now()))
            .await?;

        info!(
            user_id = user.id,
            category = report.bmi.category.as_str(),
            "Calculated BMI"
        );

        Ok(Json(CalculateBmiResponse {
            bmi_record,
            diet_plan: report.plan,
            energy: report.energy,
            quick_tips: report.quick_tips,
        })
        .into_response())
    }

    /// Handle GET /api/bmi/history/:user_id
    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Json<Vec<BmiRecord>>, AppError> {
        let history = resources.database.get_user_bmi_history(user_id).await?;
        Ok(Json(history))
    }

    /// Handle GET /api/bmi/latest/:user_id
    async fn handle_latest(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Json<LatestBmiResponse>, AppError> {
        let bmi_record = resources
            .database
            .get_latest_bmi_record(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("BMI record"))?;

        Ok(Json(LatestBmiResponse {
            diet_plan: bmi_record.diet_plan(),
            bmi_record,
        }))
    }

    /// Handle GET /api/bmi/progress/:user_id
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Json<ProgressResponse>, AppError> {
        let history = resources.database.get_user_bmi_history(user_id).await?;
        let points: Vec<ProgressPoint> = history
            .iter()
            .rev()
            .map(BmiRecord::progress_point)
            .collect();

        Ok(Json(ProgressResponse {
            user_id,
            entries: points.len(),
            summary: summarize_progress(&points),
        }))
    }

    /// Handle POST /api/bmi/report
    async fn handle_report(Json(body): Json<ProfileInput>) -> Result<Json<HealthReport>, AppError> {
        let profile = body.validate()?;
        Ok(Json(analyze_profile(&profile)))
    }
}
