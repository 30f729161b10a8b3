use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{BlogId, BlogStatus, UserId, ValidatedPageArgs};

/// Blog model - a post in the moderated publishing flow
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Blog {
    pub id: BlogId,
    pub author_id: UserId,

    // Content
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,

    // Moderation
    pub status: BlogStatus,
    pub views: i32,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new post
#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
}

/// Input for updating post content. Status moves take the machine path,
/// never this one.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlogContent {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
}

/// Detail row: the full post joined with the author's display name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub blog: Blog,
    pub author_name: String,
}

/// Listing row for index pages and the moderation queue.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogSummary {
    pub id: BlogId,
    pub author_id: UserId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub status: BlogStatus,
    pub views: i32,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new post. Status always starts at `pending`; callers never
    /// pick an initial state.
    pub async fn create(input: CreateBlog, pool: &PgPool) -> Result<Self> {
        let blog = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO blogs (author_id, title, content, excerpt, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(input.author_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.excerpt)
        .bind(&input.category)
        .fetch_one(pool)
        .await?;
        Ok(blog)
    }

    /// Find post by ID, returning None if not found
    pub async fn find_by_id(id: BlogId, pool: &PgPool) -> Result<Option<Self>> {
        let blog = sqlx::query_as::<_, Self>("SELECT * FROM blogs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(blog)
    }

    /// Find post by ID with the author's name joined in
    pub async fn find_detail(id: BlogId, pool: &PgPool) -> Result<Option<BlogDetail>> {
        let detail = sqlx::query_as::<_, BlogDetail>(
            r#"
            SELECT b.*, u.name AS author_name
            FROM blogs b
            INNER JOIN users u ON u.id = b.author_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(detail)
    }

    /// Update content fields
    pub async fn update_content(
        id: BlogId,
        input: UpdateBlogContent,
        pool: &PgPool,
    ) -> Result<Self> {
        let blog = sqlx::query_as::<_, Self>(
            r#"
            UPDATE blogs SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                excerpt = COALESCE($4, excerpt),
                category = COALESCE($5, category),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.excerpt)
        .bind(&input.category)
        .fetch_one(pool)
        .await?;
        Ok(blog)
    }

    /// Admin release or rejection: writes the status and the moderation
    /// stamp in one statement. Returns None if the row is gone.
    pub async fn set_status_stamped(
        id: BlogId,
        to: BlogStatus,
        approved_by: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let blog = sqlx::query_as::<_, Self>(
            r#"
            UPDATE blogs SET
                status = $2,
                approved_by = $3,
                approved_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(to)
        .bind(approved_by)
        .fetch_optional(pool)
        .await?;
        Ok(blog)
    }

    /// Admin move back to review: clears the stamp with the status in one
    /// statement.
    pub async fn set_status_cleared(
        id: BlogId,
        to: BlogStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let blog = sqlx::query_as::<_, Self>(
            r#"
            UPDATE blogs SET
                status = $2,
                approved_by = NULL,
                approved_at = NULL,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(to)
        .fetch_optional(pool)
        .await?;
        Ok(blog)
    }

    /// Owner resubmission. The machine edge (published|rejected -> pending)
    /// and the ownership check ride in the WHERE clause, so a concurrent
    /// status change makes this match zero rows instead of overwriting it.
    pub async fn resubmit(id: BlogId, author_id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let blog = sqlx::query_as::<_, Self>(
            r#"
            UPDATE blogs SET
                status = 'pending',
                approved_by = NULL,
                approved_at = NULL,
                updated_at = NOW()
            WHERE id = $1
              AND author_id = $2
              AND status IN ('published', 'rejected')
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(author_id)
        .fetch_optional(pool)
        .await?;
        Ok(blog)
    }

    /// Monotonic view counter, published posts only.
    pub async fn bump_views(id: BlogId, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE blogs SET views = views + 1 WHERE id = $1 AND status = 'published'")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a post
    pub async fn delete(id: BlogId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Public index: published posts, newest first, optional category
    /// filter.
    pub async fn list_published(
        category: Option<&str>,
        args: &ValidatedPageArgs,
        pool: &PgPool,
    ) -> Result<Vec<BlogSummary>> {
        let blogs = sqlx::query_as::<_, BlogSummary>(
            r#"
            SELECT b.id, b.author_id, b.title, b.excerpt, b.category, b.status,
                   b.views, u.name AS author_name, b.created_at
            FROM blogs b
            INNER JOIN users u ON u.id = b.author_id
            WHERE b.status = 'published'
              AND ($1::text IS NULL OR b.category = $1)
            ORDER BY b.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(args.limit())
        .bind(args.offset())
        .fetch_all(pool)
        .await?;
        Ok(blogs)
    }

    /// Every post by one author, any status, newest first.
    pub async fn list_by_author(author_id: UserId, pool: &PgPool) -> Result<Vec<BlogSummary>> {
        let blogs = sqlx::query_as::<_, BlogSummary>(
            r#"
            SELECT b.id, b.author_id, b.title, b.excerpt, b.category, b.status,
                   b.views, u.name AS author_name, b.created_at
            FROM blogs b
            INNER JOIN users u ON u.id = b.author_id
            WHERE b.author_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;
        Ok(blogs)
    }

    /// Moderation queue: pending posts, oldest first.
    pub async fn list_pending(args: &ValidatedPageArgs, pool: &PgPool) -> Result<Vec<BlogSummary>> {
        let blogs = sqlx::query_as::<_, BlogSummary>(
            r#"
            SELECT b.id, b.author_id, b.title, b.excerpt, b.category, b.status,
                   b.views, u.name AS author_name, b.created_at
            FROM blogs b
            INNER JOIN users u ON u.id = b.author_id
            WHERE b.status = 'pending'
            ORDER BY b.created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(args.limit())
        .bind(args.offset())
        .fetch_all(pool)
        .await?;
        Ok(blogs)
    }
}
