// ABOUTME: Core types and constants for the AURA BMI advisor
// ABOUTME: Foundation crate with error handling, constants, and validated profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![deny(unsafe_code)]

//! # AURA Core
//!
//! Foundation crate providing shared types and constants for the AURA BMI
//! advisor. It changes rarely so the engine and server crates can compile
//! incrementally against it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service identity, defaults and environment variable names
//! - **models**: Validated `Profile` and the enums it is built from

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (Profile, Gender, `ActivityLevel`, Goal, Category)
pub mod models;
