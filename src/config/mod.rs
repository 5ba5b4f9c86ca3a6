// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Configuration module
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file); command-line flags in the binary override a few of them.

/// Environment and server configuration
pub mod environment;

pub use environment::{AdviceConfig, DatabaseUrl, Environment, ServerConfig};
