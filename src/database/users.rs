// ABOUTME: User table schema and account queries
// ABOUTME: Create users with unique emails and look them up by id or email
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use aura_core::errors::{AppError, AppResult};
use aura_core::models::Gender;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;

use super::Database;
use crate::models::{NewUser, User};

impl Database {
    /// Create users table and indexes
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the email is taken, or a database
    /// error if the insert fails.
    pub async fn create_user(&self, user: &NewUser) -> AppResult<User> {
        if self.get_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "A user with email {} already exists",
                user.email
            )));
        }

        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO users (name, email, age, gender, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(i64::from(user.age))
        .bind(user.gender.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(user_id = id, "Created user");

        Ok(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            gender: user.gender,
            created_at,
        })
    }

    /// Get user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get_user(&self, user_id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, age, gender, created_at
            FROM users WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get user by email, compared case-insensitively
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, age, gender, created_at
            FROM users WHERE email = $1
            ",
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let age: i64 = row.try_get("age")?;
    let gender: String = row.try_get("gender")?;

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        age: u32::try_from(age)
            .map_err(|_| AppError::database(format!("Stored age {age} is out of range")))?,
        gender: gender.parse::<Gender>()?,
        created_at: row.try_get("created_at")?,
    })
}
