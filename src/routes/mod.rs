// ABOUTME: Route module organization for the AURA HTTP API
// ABOUTME: One router per domain, merged by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the engine, the database or the advice service.

/// Remote advice routes
pub mod advice;
/// BMI calculation, history and report routes
pub mod bmi;
/// Health check and readiness routes
pub mod health;
/// User account routes
pub mod users;

pub use advice::AdviceRoutes;
pub use bmi::BmiRoutes;
pub use health::HealthRoutes;
pub use users::UserRoutes;
