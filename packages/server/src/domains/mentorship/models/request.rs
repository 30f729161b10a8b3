use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{MentorshipRequestId, MentorshipStatus, UserId};

/// Mentorship request model
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MentorshipRequest {
    pub id: MentorshipRequestId,
    pub student_id: UserId,
    pub mentor_user_id: UserId,
    pub message: Option<String>,
    pub status: MentorshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request joined with both display names, for listings.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MentorshipRequestWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub request: MentorshipRequest,
    pub student_name: String,
    pub mentor_name: String,
}

const REQUEST_SELECT: &str = r#"
SELECT r.*, s.name AS student_name, m.name AS mentor_name
FROM mentorship_requests r
INNER JOIN users s ON s.id = r.student_id
INNER JOIN users m ON m.id = r.mentor_user_id
"#;

impl MentorshipRequest {
    /// Open a request in `pending`. The partial unique index rejects a
    /// second open request against the same mentor.
    pub async fn create(
        student_id: UserId,
        mentor_user_id: UserId,
        message: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        let request = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO mentorship_requests (student_id, mentor_user_id, message)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(mentor_user_id)
        .bind(message)
        .fetch_one(pool)
        .await?;
        Ok(request)
    }

    /// Find request by ID, returning None if not found
    pub async fn find_by_id(id: MentorshipRequestId, pool: &PgPool) -> Result<Option<Self>> {
        let request =
            sqlx::query_as::<_, Self>("SELECT * FROM mentorship_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(request)
    }

    /// Compare-and-set status move: the write lands only if the row still
    /// holds the status the decision was made against.
    pub async fn update_status_from(
        id: MentorshipRequestId,
        from: MentorshipStatus,
        to: MentorshipStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let request = sqlx::query_as::<_, Self>(
            r#"
            UPDATE mentorship_requests SET
                status = $3,
                updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(pool)
        .await?;
        Ok(request)
    }

    /// Requests opened by one student, newest first.
    pub async fn list_for_student(
        student_id: UserId,
        pool: &PgPool,
    ) -> Result<Vec<MentorshipRequestWithNames>> {
        let sql = format!("{REQUEST_SELECT} WHERE r.student_id = $1 ORDER BY r.created_at DESC");
        let requests = sqlx::query_as::<_, MentorshipRequestWithNames>(&sql)
            .bind(student_id)
            .fetch_all(pool)
            .await?;
        Ok(requests)
    }

    /// Requests targeting one mentor, oldest open ones first.
    pub async fn list_for_mentor(
        mentor_user_id: UserId,
        pool: &PgPool,
    ) -> Result<Vec<MentorshipRequestWithNames>> {
        let sql = format!(
            "{REQUEST_SELECT} WHERE r.mentor_user_id = $1 ORDER BY r.status = 'pending' DESC, r.created_at ASC"
        );
        let requests = sqlx::query_as::<_, MentorshipRequestWithNames>(&sql)
            .bind(mentor_user_id)
            .fetch_all(pool)
            .await?;
        Ok(requests)
    }

    /// Every request on the platform, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MentorshipRequestWithNames>> {
        let sql = format!("{REQUEST_SELECT} ORDER BY r.created_at DESC");
        let requests = sqlx::query_as::<_, MentorshipRequestWithNames>(&sql)
            .fetch_all(pool)
            .await?;
        Ok(requests)
    }
}
