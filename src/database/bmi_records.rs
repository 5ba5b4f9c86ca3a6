// ABOUTME: BMI record table schema and history queries
// ABOUTME: Stores engine snapshots per user and reads them back newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use aura_core::errors::{AppError, AppResult};
use aura_intelligence::BmiSnapshot;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use super::Database;
use crate::models::BmiRecord;

const SELECT_RECORD: &str = r"
    SELECT id, user_id, height, weight, bmi, category, activity_level, created_at
    FROM bmi_records
";

impl Database {
    /// Create BMI records table and indexes
    pub(super) async fn migrate_bmi_records(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS bmi_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                height REAL NOT NULL,
                weight REAL NOT NULL,
                bmi REAL NOT NULL,
                category TEXT NOT NULL,
                activity_level TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bmi_records_user_created ON bmi_records(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a snapshot for an existing user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist, or a database
    /// error if the insert fails.
    pub async fn create_bmi_record(
        &self,
        user_id: i64,
        snapshot: &BmiSnapshot,
    ) -> AppResult<BmiRecord> {
        if self.get_user(user_id).await?.is_none() {
            return Err(AppError::not_found(format!("User {user_id}")));
        }

        let result = sqlx::query(
            r"
            INSERT INTO bmi_records (user_id, height, weight, bmi, category, activity_level, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user_id)
        .bind(snapshot.height_cm)
        .bind(snapshot.weight_kg)
        .bind(snapshot.bmi)
        .bind(snapshot.category.as_str())
        .bind(snapshot.activity_level.as_str())
        .bind(snapshot.recorded_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(user_id, record_id = id, category = snapshot.category.as_str(), "Stored BMI record");

        Ok(BmiRecord {
            id,
            user_id,
            height: snapshot.height_cm,
            weight: snapshot.weight_kg,
            bmi: snapshot.bmi,
            category: snapshot.category.as_str().to_owned(),
            activity_level: snapshot.activity_level.as_str().to_owned(),
            created_at: snapshot.recorded_at,
        })
    }

    /// All records of a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn get_user_bmi_history(&self, user_id: i64) -> AppResult<Vec<BmiRecord>> {
        let rows = sqlx::query(&format!(
            "{SELECT_RECORD} WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_record).collect()
    }

    /// Most recent record of a user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get_latest_bmi_record(&self, user_id: i64) -> AppResult<Option<BmiRecord>> {
        let row = sqlx::query(&format!(
            "{SELECT_RECORD} WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }
}

fn row_to_record(row: &SqliteRow) -> AppResult<BmiRecord> {
    Ok(BmiRecord {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        height: row.try_get("height")?,
        weight: row.try_get("weight")?,
        bmi: row.try_get("bmi")?,
        category: row.try_get("category")?,
        activity_level: row.try_get("activity_level")?,
        created_at: row.try_get("created_at")?,
    })
}
