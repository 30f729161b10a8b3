use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{AnswerId, QuestionId, Role, UserId};

/// Answer model
///
/// `is_verified` is frozen at creation: it records whether the author held
/// the mentor role at the time of writing, not whether they hold it now.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author_id: UserId,
    pub content: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Answer joined with its author's display name and role, for the
/// question detail payload.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AnswerWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub answer: Answer,
    pub author_name: String,
    pub author_role: Role,
}

impl Answer {
    /// A mentor's answer is authoritative by role; there is no separate
    /// approval step.
    pub fn verified_for(role: Role) -> bool {
        role == Role::Mentor
    }

    pub async fn create(
        question_id: QuestionId,
        author_id: UserId,
        content: &str,
        is_verified: bool,
        pool: &PgPool,
    ) -> Result<Self> {
        let answer = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO answers (question_id, author_id, content, is_verified)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(question_id)
        .bind(author_id)
        .bind(content)
        .bind(is_verified)
        .fetch_one(pool)
        .await?;
        Ok(answer)
    }

    /// Find answer by ID, returning None if not found
    pub async fn find_by_id(id: AnswerId, pool: &PgPool) -> Result<Option<Self>> {
        let answer = sqlx::query_as::<_, Self>("SELECT * FROM answers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(answer)
    }

    /// Answers for one question, verified first, then oldest to newest.
    pub async fn list_for_question(
        question_id: QuestionId,
        pool: &PgPool,
    ) -> Result<Vec<AnswerWithAuthor>> {
        let answers = sqlx::query_as::<_, AnswerWithAuthor>(
            r#"
            SELECT a.*, u.name AS author_name, u.role AS author_role
            FROM answers a
            INNER JOIN users u ON u.id = a.author_id
            WHERE a.question_id = $1
            ORDER BY a.is_verified DESC, a.created_at ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(answers)
    }

    pub async fn delete(id: AnswerId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mentor_answers_are_verified() {
        assert!(Answer::verified_for(Role::Mentor));
        assert!(!Answer::verified_for(Role::Student));
        assert!(!Answer::verified_for(Role::Admin));
    }
}
