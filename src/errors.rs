// ABOUTME: Re-exports the shared error types for use inside the server crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Error types shared with the engine crates

pub use aura_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
