//! Blog mutation actions
//!
//! Every status move funnels through [`set_blog_status`]: load, policy,
//! machine, then one atomic write carrying the stamp decision.

use serde::Deserialize;
use tracing::info;

use crate::common::validate::{optional_text, require_text};
use crate::common::{
    authorize, require_actor, utils, Actor, ApiError, ApiResult, BlogId, BlogStatus,
    ResourceAction,
};
use crate::domains::blogs::machines::{blog_transition, ActorClass, ApprovalStamp};
use crate::domains::blogs::models::{Blog, CreateBlog, UpdateBlogContent};
use crate::kernel::ServerDeps;

/// Longest generated excerpt, in characters.
const EXCERPT_MAX_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
pub struct CreateBlogInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogInput {
    pub blog_id: BlogId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Optional status move, judged exactly like `update_blog_status`.
    #[serde(default)]
    pub status: Option<BlogStatus>,
}

/// Create a post in `pending`. The excerpt falls back to a prefix of the
/// content when the author leaves it out.
pub async fn create_blog(
    actor: Option<&Actor>,
    input: CreateBlogInput,
    deps: &ServerDeps,
) -> ApiResult<Blog> {
    let title = require_text("Title", &input.title, 200)?;
    let content = require_text("Content", &input.content, 50_000)?;
    let excerpt = match optional_text("Excerpt", input.excerpt, 500)? {
        Some(provided) => provided,
        None => utils::excerpt(&content, EXCERPT_MAX_CHARS),
    };
    let category =
        optional_text("Category", input.category, 50)?.unwrap_or_else(|| "general".to_string());

    authorize(actor, ResourceAction::CreateBlog)?;
    let actor = require_actor(actor)?;

    info!(author_id = %actor.id, %title, "Creating blog post");

    let blog = Blog::create(
        CreateBlog {
            author_id: actor.id,
            title,
            content,
            excerpt,
            category,
        },
        &deps.db_pool,
    )
    .await
    .map_err(ApiError::from_db)?;

    Ok(blog)
}

/// Edit content and/or request a status move. Content edits are owner
/// only; an accompanying status value takes the same path as
/// `update_blog_status`.
pub async fn update_blog(
    actor: Option<&Actor>,
    input: UpdateBlogInput,
    deps: &ServerDeps,
) -> ApiResult<Blog> {
    let title = optional_text("Title", input.title, 200)?;
    let content = optional_text("Content", input.content, 50_000)?;
    let excerpt = optional_text("Excerpt", input.excerpt, 500)?;
    let category = optional_text("Category", input.category, 50)?;

    let mut blog = Blog::find_by_id(input.blog_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found.".to_string()))?;

    let edits_content =
        title.is_some() || content.is_some() || excerpt.is_some() || category.is_some();

    if edits_content {
        authorize(
            actor,
            ResourceAction::EditBlog {
                author_id: blog.author_id,
            },
        )?;

        // New content with no explicit excerpt regenerates the fallback.
        let excerpt = match (&excerpt, &content) {
            (None, Some(fresh)) => Some(utils::excerpt(fresh, EXCERPT_MAX_CHARS)),
            _ => excerpt,
        };

        info!(blog_id = %blog.id, "Updating blog content");

        blog = Blog::update_content(
            blog.id,
            UpdateBlogContent {
                title,
                content,
                excerpt,
                category,
            },
            &deps.db_pool,
        )
        .await
        .map_err(ApiError::from_db)?;
    }

    if let Some(to) = input.status {
        blog = set_blog_status(actor, blog.id, to, deps).await?;
    }

    Ok(blog)
}

/// Move a post along one status edge. Admins take any edge and stamp the
/// moderation columns; owners only resubmit. The write is a single atomic
/// statement; owner resubmission carries its edge in the WHERE clause.
pub async fn set_blog_status(
    actor: Option<&Actor>,
    blog_id: BlogId,
    to: BlogStatus,
    deps: &ServerDeps,
) -> ApiResult<Blog> {
    let blog = Blog::find_by_id(blog_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::SetBlogStatus {
            author_id: blog.author_id,
            to,
        },
    )?;
    let actor = require_actor(actor)?;

    let by = if actor.is_admin() {
        ActorClass::Admin
    } else {
        ActorClass::Owner
    };
    let stamp = blog_transition(by, blog.status, to)?;

    info!(blog_id = %blog.id, from = %blog.status, %to, "Setting blog status");

    let updated = match stamp {
        ApprovalStamp::Set => {
            Blog::set_status_stamped(blog.id, to, actor.id, &deps.db_pool).await?
        }
        ApprovalStamp::Clear => match by {
            ActorClass::Admin => Blog::set_status_cleared(blog.id, to, &deps.db_pool).await?,
            ActorClass::Owner => Blog::resubmit(blog.id, actor.id, &deps.db_pool).await?,
        },
    };

    match (updated, by) {
        (Some(blog), _) => Ok(blog),
        (None, ActorClass::Admin) => {
            Err(ApiError::NotFound("Blog post not found.".to_string()))
        }
        // The resubmission edge disappeared between read and write.
        (None, ActorClass::Owner) => match Blog::find_by_id(blog.id, &deps.db_pool).await? {
            None => Err(ApiError::NotFound("Blog post not found.".to_string())),
            Some(_) => Err(ApiError::InvalidTransition(
                "Post is already pending review.".to_string(),
            )),
        },
    }
}

/// Delete a post (owner or admin).
pub async fn delete_blog(
    actor: Option<&Actor>,
    blog_id: BlogId,
    deps: &ServerDeps,
) -> ApiResult<()> {
    let blog = Blog::find_by_id(blog_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::DeleteBlog {
            author_id: blog.author_id,
        },
    )?;

    info!(blog_id = %blog.id, "Deleting blog post");

    Blog::delete(blog.id, &deps.db_pool).await?;

    Ok(())
}
