//! Blog query actions
//!
//! Payload types carry the display strings (date, relative time, read
//! time) alongside the raw row, so clients render them untouched.

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::common::validate::optional_text;
use crate::common::{
    authorize, require_actor, utils, Actor, ApiError, ApiResult, BlogId, PageArgs, ResourceAction,
};
use crate::domains::blogs::models::{Blog, BlogDetail, BlogSummary};
use crate::kernel::ServerDeps;

/// Detail payload: the joined row plus display fields.
#[derive(Debug, Serialize)]
pub struct BlogDetailPayload {
    #[serde(flatten)]
    pub detail: BlogDetail,
    pub read_time_minutes: u32,
    pub created_display: String,
}

impl From<BlogDetail> for BlogDetailPayload {
    fn from(detail: BlogDetail) -> Self {
        let read_time_minutes = utils::read_time_minutes(&detail.blog.content);
        let created_display = utils::display_date(detail.blog.created_at);
        Self {
            detail,
            read_time_minutes,
            created_display,
        }
    }
}

/// Listing payload: summary row plus a relative timestamp.
#[derive(Debug, Serialize)]
pub struct BlogSummaryPayload {
    #[serde(flatten)]
    pub summary: BlogSummary,
    pub created_ago: String,
}

impl From<BlogSummary> for BlogSummaryPayload {
    fn from(summary: BlogSummary) -> Self {
        let created_ago = utils::time_ago(summary.created_at, Utc::now());
        Self {
            summary,
            created_ago,
        }
    }
}

/// Public index of published posts, optionally narrowed to one category.
pub async fn list_blogs(
    actor: Option<&Actor>,
    category: Option<String>,
    page: PageArgs,
    deps: &ServerDeps,
) -> ApiResult<Vec<BlogSummaryPayload>> {
    let category = optional_text("Category", category, 50)?;
    let args = page.validate()?;
    authorize(actor, ResourceAction::ListPublishedBlogs)?;

    let blogs = Blog::list_published(category.as_deref(), &args, &deps.db_pool).await?;
    Ok(blogs.into_iter().map(Into::into).collect())
}

/// One post with its author. Published posts are public and count the
/// view; anything else is visible to the owner and admins only, without
/// touching the counter.
pub async fn get_blog_detail(
    actor: Option<&Actor>,
    blog_id: BlogId,
    deps: &ServerDeps,
) -> ApiResult<BlogDetailPayload> {
    // Bump first so the returned row carries the post-increment count. The
    // statement only matches published rows, and a failed bump never blocks
    // the read.
    if let Err(error) = Blog::bump_views(blog_id, &deps.db_pool).await {
        warn!(blog_id = %blog_id, ?error, "View count bump failed");
    }

    let detail = Blog::find_detail(blog_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::ViewBlog {
            author_id: detail.blog.author_id,
            status: detail.blog.status,
        },
    )?;

    Ok(detail.into())
}

/// The caller's own posts, every status.
pub async fn list_my_blogs(
    actor: Option<&Actor>,
    deps: &ServerDeps,
) -> ApiResult<Vec<BlogSummaryPayload>> {
    authorize(actor, ResourceAction::ViewOwnContent)?;
    let actor = require_actor(actor)?;

    let blogs = Blog::list_by_author(actor.id, &deps.db_pool).await?;
    Ok(blogs.into_iter().map(Into::into).collect())
}

/// Admin moderation queue, oldest submission first.
pub async fn list_pending_blogs(
    actor: Option<&Actor>,
    page: PageArgs,
    deps: &ServerDeps,
) -> ApiResult<Vec<BlogSummaryPayload>> {
    let args = page.validate()?;
    authorize(actor, ResourceAction::ListPendingBlogs)?;

    let blogs = Blog::list_pending(&args, &deps.db_pool).await?;
    Ok(blogs.into_iter().map(Into::into).collect())
}
