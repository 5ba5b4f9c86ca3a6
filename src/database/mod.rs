// ABOUTME: SQLite persistence for users and BMI snapshots
// ABOUTME: Owns the connection pool and creates the schema on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! # Database Management
//!
//! Thin wrapper over a `sqlx` SQLite pool. The schema is two tables: `users`
//! and `bmi_records`, each created by its own `migrate_*` step.

mod bmi_records;
mod users;

use std::str::FromStr;

use aura_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use crate::config::DatabaseUrl;

/// Pool size for file-backed databases
const FILE_POOL_SIZE: u32 = 5;

/// Database manager for users and BMI records
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database and run migrations
    ///
    /// In-memory databases are pinned to a single long-lived connection, since
    /// every SQLite connection to `:memory:` sees its own empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// connection fails or a migration fails.
    pub async fn new(database_url: &DatabaseUrl) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = database_url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let connect_options =
            SqliteConnectOptions::from_str(&database_url.to_connection_string())?
                .create_if_missing(true)
                .foreign_keys(true);

        let pool_options = if database_url.is_memory() {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(FILE_POOL_SIZE)
        };

        let pool = pool_options.connect_with(connect_options).await?;
        let db = Self { pool };

        db.migrate().await?;
        info!(database = %database_url, "Database ready");

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_bmi_records().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Cheap round trip used by the readiness check
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot serve a query
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
