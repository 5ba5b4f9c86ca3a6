// ABOUTME: Shared resource container handed to every HTTP route
// ABOUTME: Bundles the database, the advice service and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc` so handlers never
//! reconstruct the pool or the provider client.

use std::sync::Arc;

use crate::advice::AdviceService;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// SQLite persistence
    pub database: Arc<Database>,
    /// Remote advice with static fallback
    pub advice: Arc<AdviceService>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(database: Database, advice: AdviceService, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            advice: Arc::new(advice),
            config: Arc::new(config),
        }
    }

    /// Open the database and build the advice service from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let database = Database::new(&config.database_url).await?;
        let advice = AdviceService::from_config(&config.advice);
        Ok(Self::new(database, advice, config))
    }
}
