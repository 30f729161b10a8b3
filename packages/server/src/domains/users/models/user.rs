use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{AccountStatus, Actor, Role, UserId, ValidatedPageArgs, VerificationStatus};

/// User model - every account on the platform
///
/// Role-specific profile columns are nullable; a student row leaves the
/// mentor columns empty and vice versa.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,

    // Identity
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,

    // Access control
    pub role: Role,
    pub status: AccountStatus,
    pub verification_status: VerificationStatus,

    // Student profile
    pub roll_number: Option<String>,
    pub branch: Option<String>,
    pub year: Option<i32>,

    // Mentor profile
    pub company: Option<String>,
    pub position: Option<String>,
    pub expertise: Option<String>,

    pub bio: Option<String>,
    pub id_document_path: Option<String>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub roll_number: Option<String>,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub expertise: Option<String>,
    pub bio: Option<String>,
    pub id_document_path: Option<String>,
}

/// Input for updating profile fields. Identity and access-control columns
/// are out of reach here.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub roll_number: Option<String>,
    pub branch: Option<String>,
    pub year: Option<i32>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub expertise: Option<String>,
}

/// Public mentor directory entry. No email, no moderation fields.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MentorSummary {
    pub id: UserId,
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub expertise: Option<String>,
    pub bio: Option<String>,
}

impl User {
    /// The actor context the authorization policy judges.
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role, self.status)
    }

    /// Find user by ID, returning None if not found
    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find user by canonical (lowercased) email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Create a new user. Verification always starts at `pending`.
    pub async fn create(input: CreateUser, pool: &PgPool) -> Result<Self> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (
                name, email, password_hash, role,
                roll_number, branch, year,
                company, position, expertise,
                bio, id_document_path
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.role)
        .bind(&input.roll_number)
        .bind(&input.branch)
        .bind(input.year)
        .bind(&input.company)
        .bind(&input.position)
        .bind(&input.expertise)
        .bind(&input.bio)
        .bind(&input.id_document_path)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Insert an admin account. Only the `create_admin` CLI calls this;
    /// admins skip the verification queue entirely.
    pub async fn create_admin(
        name: &str,
        email: &str,
        password_hash: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (name, email, password_hash, role, status, verification_status)
            VALUES ($1, $2, $3, 'admin', 'active', 'approved')
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Update profile fields
    pub async fn update_profile(id: UserId, input: UpdateProfile, pool: &PgPool) -> Result<Self> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                bio = COALESCE($3, bio),
                roll_number = COALESCE($4, roll_number),
                branch = COALESCE($5, branch),
                year = COALESCE($6, year),
                company = COALESCE($7, company),
                position = COALESCE($8, position),
                expertise = COALESCE($9, expertise),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.bio)
        .bind(&input.roll_number)
        .bind(&input.branch)
        .bind(input.year)
        .bind(&input.company)
        .bind(&input.position)
        .bind(&input.expertise)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Replace the stored credential hash
    pub async fn update_password(id: UserId, password_hash: &str, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Set verification status. Any move is valid here, including re-setting
    /// the current value; returns None if the user no longer exists.
    pub async fn set_verification(
        id: UserId,
        to: VerificationStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>(
            "UPDATE users SET verification_status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(to)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    /// Set account status (active/inactive)
    pub async fn set_status(
        id: UserId,
        to: AccountStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>(
            "UPDATE users SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(to)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    /// Delete a user. Owned content cascades at the schema level.
    pub async fn delete(id: UserId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List users for the admin screen, optionally filtered by verification
    /// status, newest first.
    pub async fn list(
        verification: Option<VerificationStatus>,
        args: &ValidatedPageArgs,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let users = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM users
            WHERE ($1::verification_status IS NULL OR verification_status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(verification)
        .bind(args.limit())
        .bind(args.offset())
        .fetch_all(pool)
        .await?;
        Ok(users)
    }

    /// Public mentor directory: approved, active mentors only.
    pub async fn list_mentors(
        args: &ValidatedPageArgs,
        pool: &PgPool,
    ) -> Result<Vec<MentorSummary>> {
        let mentors = sqlx::query_as::<_, MentorSummary>(
            r#"
            SELECT id, name, company, position, expertise, bio
            FROM users
            WHERE role = 'mentor'
              AND verification_status = 'approved'
              AND status = 'active'
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(args.limit())
        .bind(args.offset())
        .fetch_all(pool)
        .await?;
        Ok(mentors)
    }
}
