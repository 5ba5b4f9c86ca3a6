// ABOUTME: Main library entry point for the AURA BMI advisor server
// ABOUTME: Wires configuration, persistence, remote advice and the HTTP API around the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![deny(unsafe_code)]

//! # AURA BMI Advisor Server
//!
//! HTTP service around the `aura-intelligence` metrics engine. It classifies
//! BMI, derives energy and macro targets, selects a category diet plan, stores
//! snapshots per user in SQLite, and optionally asks a text-generation provider
//! for coaching advice with a static fallback.
//!
//! ## Architecture
//!
//! - **Engine** (`aura-intelligence`): pure, synchronous computations
//! - **Database**: users and BMI snapshots over `sqlx` SQLite
//! - **Advice**: LLM provider behind a timeout, last-request-wins per subject
//! - **Routes**: one axum router per domain, merged in [`server`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use aura_bmi_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("AURA configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Remote advice: payload assembly, prompts, service and sequencing
pub mod advice;

/// Environment-based configuration
pub mod config;

/// SQLite persistence for users and BMI records
pub mod database;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// LLM provider abstraction and the Gemini client
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for tracing and CORS
pub mod middleware;

/// Persisted data models
pub mod models;

/// Shared resources handed to routes
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

pub use aura_core::models::{ActivityLevel, Gender, Goal, Profile, ProfileInput};
pub use aura_intelligence::{analyze_profile, classify, estimate_energy, plan_for, HealthReport};
