//! User settings repository.
//!
//! The table carries a uniqueness constraint on `user_id`, and every write
//! goes through a single `INSERT ... ON CONFLICT(user_id) DO UPDATE`
//! statement, so repeated saves for one owner never produce a second row.
//! `id` and `created_at` are fixed by the first insert; later upserts only
//! replace the editable columns and `updated_at`.

use crate::{DbError, Result as DbErrorResult};

use bk_core::UserSettings;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct UserSettingsRow {
    id: String,
    user_id: String,
    logo_url: Option<String>,
    primary_color: String,
    secondary_color: String,
    font_family: String,
    created_at: i64,
    updated_at: i64,
}

impl UserSettingsRow {
    #[track_caller]
    fn into_settings(self) -> DbErrorResult<UserSettings> {
        Ok(UserSettings {
            id: Some(parse_uuid(&self.id, "user_settings.id")?),
            user_id: Some(parse_uuid(&self.user_id, "user_settings.user_id")?),
            logo_url: self.logo_url,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            font_family: self.font_family,
            created_at: Some(parse_timestamp(self.created_at, "user_settings.created_at")?),
            updated_at: Some(parse_timestamp(self.updated_at, "user_settings.updated_at")?),
        })
    }
}

#[track_caller]
fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::InvalidRecord {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::InvalidRecord {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct UserSettingsRepository {
    pool: SqlitePool,
}

impl UserSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<UserSettings>> {
        let row = sqlx::query_as::<_, UserSettingsRow>(
            r#"
                SELECT id, user_id, logo_url, primary_color, secondary_color, font_family,
                    created_at, updated_at
                FROM user_settings
                WHERE user_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserSettingsRow::into_settings).transpose()
    }

    /// Insert or update the record keyed on its owner and return the stored row.
    pub async fn upsert(&self, settings: &UserSettings) -> DbErrorResult<UserSettings> {
        let user_id = settings.user_id.ok_or_else(|| DbError::InvalidRecord {
            message: "user_settings.user_id is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let id = settings.id.unwrap_or_else(Uuid::new_v4).to_string();
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO user_settings (
                    id, user_id, logo_url, primary_color, secondary_color, font_family,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    logo_url = excluded.logo_url,
                    primary_color = excluded.primary_color,
                    secondary_color = excluded.secondary_color,
                    font_family = excluded.font_family,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(id)
        .bind(user_id.to_string())
        .bind(settings.logo_url.as_deref())
        .bind(&settings.primary_color)
        .bind(&settings.secondary_color)
        .bind(&settings.font_family)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        log::debug!("Upserted user settings for {}", user_id);

        self.find_by_user(user_id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("user_settings row for {} missing after upsert", user_id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Number of stored records
    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_settings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of stored records for one owner (0 or 1)
    pub async fn count_for_user(&self, user_id: Uuid) -> DbErrorResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_settings WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
