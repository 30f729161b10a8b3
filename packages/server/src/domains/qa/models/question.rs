use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{QuestionId, UserId, ValidatedPageArgs};

/// Every question read goes through this projection so
/// `has_verified_answer` is always derived from the answers table, never
/// stored.
const QUESTION_SELECT: &str = r#"
SELECT q.*,
       EXISTS (
           SELECT 1 FROM answers a
           WHERE a.question_id = q.id AND a.is_verified
       ) AS has_verified_answer
FROM questions q
"#;

/// Question model
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub views: i32,
    pub has_verified_answer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a question
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub author_id: UserId,
    pub title: String,
    pub content: String,
}

/// Input for updating a question
#[derive(Debug, Clone, Default)]
pub struct UpdateQuestion {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Question {
    /// Create a question. A fresh question cannot have a verified answer
    /// yet, so the projection is a literal.
    pub async fn create(input: CreateQuestion, pool: &PgPool) -> Result<Self> {
        let question = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO questions (author_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING *, FALSE AS has_verified_answer
            "#,
        )
        .bind(input.author_id)
        .bind(&input.title)
        .bind(&input.content)
        .fetch_one(pool)
        .await?;
        Ok(question)
    }

    /// Find question by ID, returning None if not found
    pub async fn find_by_id(id: QuestionId, pool: &PgPool) -> Result<Option<Self>> {
        let sql = format!("{QUESTION_SELECT} WHERE q.id = $1");
        let question = sqlx::query_as::<_, Self>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(question)
    }

    /// Update title/content
    pub async fn update_content(
        id: QuestionId,
        input: UpdateQuestion,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE questions SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.content)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Monotonic view counter; bumped on every detail fetch.
    pub async fn bump_views(id: QuestionId, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE questions SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a question. Its answers cascade at the schema level.
    pub async fn delete(id: QuestionId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Newest questions first.
    pub async fn list(args: &ValidatedPageArgs, pool: &PgPool) -> Result<Vec<Self>> {
        let sql = format!("{QUESTION_SELECT} ORDER BY q.created_at DESC LIMIT $1 OFFSET $2");
        let questions = sqlx::query_as::<_, Self>(&sql)
            .bind(args.limit())
            .bind(args.offset())
            .fetch_all(pool)
            .await?;
        Ok(questions)
    }
}
