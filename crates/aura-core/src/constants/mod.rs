// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, network defaults, profile limits and env variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! Constants grouped by domain.

/// Service identity
pub mod service {
    /// Service name used in logs and health responses
    pub const SERVICE_NAME: &str = "aura-bmi-server";
    /// Service version
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
}

/// Accepted ranges for profile fields
pub mod limits {
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 2.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Minimum age in years
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum age in years
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Remote advice defaults
pub mod advice {
    /// Text returned when no text-generation key is configured
    pub const ADVICE_UNAVAILABLE: &str = "Advice unavailable right now.";
    /// Default timeout for a remote advice call
    pub const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 15;
    /// Maximum number of tips surfaced from remote advice text
    pub const MAX_ADVICE_TIPS: usize = 6;
}

/// Environment variable names
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Gemini base URL override
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Remote advice timeout in seconds
    pub const ADVICE_TIMEOUT_SECS: &str = "ADVICE_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
}
