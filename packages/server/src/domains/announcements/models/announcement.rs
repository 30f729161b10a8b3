use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{AnnouncementId, UserId};

/// Announcement model. `created_by` survives as NULL if the posting admin
/// is later removed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub content: String,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub async fn create(
        title: &str,
        content: &str,
        created_by: UserId,
        pool: &PgPool,
    ) -> Result<Self> {
        let announcement = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO announcements (title, content, created_by)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(announcement)
    }

    /// Find announcement by ID, returning None if not found
    pub async fn find_by_id(id: AnnouncementId, pool: &PgPool) -> Result<Option<Self>> {
        let announcement =
            sqlx::query_as::<_, Self>("SELECT * FROM announcements WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(announcement)
    }

    /// Newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        let announcements = sqlx::query_as::<_, Self>(
            "SELECT * FROM announcements ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(announcements)
    }

    pub async fn delete(id: AnnouncementId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
