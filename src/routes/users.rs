// ABOUTME: User account routes: registration and lookup by email
// ABOUTME: Validates the request body and maps duplicates to 409
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::errors::AppError;
use crate::models::CreateUserRequest;
use crate::resources::ServerResources;

/// User account routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create_user))
            .route("/api/users/by-email/:email", get(Self::handle_get_by_email))
            .with_state(resources)
    }

    /// Handle POST /api/users
    async fn handle_create_user(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateUserRequest>,
    ) -> Result<Response, AppError> {
        let new_user = body.validate()?;
        let user = resources.database.create_user(&new_user).await?;
        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle GET /api/users/by-email/:email
    async fn handle_get_by_email(
        State(resources): State<Arc<ServerResources>>,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        Ok(Json(user).into_response())
    }
}
