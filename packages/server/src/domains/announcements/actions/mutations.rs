//! Announcement mutation actions

use tracing::info;

use crate::common::validate::require_text;
use crate::common::{
    authorize, require_actor, Actor, AnnouncementId, ApiError, ApiResult, ResourceAction,
};
use crate::domains::announcements::models::Announcement;
use crate::kernel::ServerDeps;

/// Post an announcement (admin only).
pub async fn create_announcement(
    actor: Option<&Actor>,
    title: String,
    content: String,
    deps: &ServerDeps,
) -> ApiResult<Announcement> {
    let title = require_text("Title", &title, 200)?;
    let content = require_text("Content", &content, 5000)?;

    authorize(actor, ResourceAction::CreateAnnouncement)?;
    let actor = require_actor(actor)?;

    info!(admin_id = %actor.id, %title, "Creating announcement");

    let announcement = Announcement::create(&title, &content, actor.id, &deps.db_pool).await?;

    Ok(announcement)
}

/// Remove an announcement (admin only).
pub async fn delete_announcement(
    actor: Option<&Actor>,
    announcement_id: AnnouncementId,
    deps: &ServerDeps,
) -> ApiResult<()> {
    let announcement = Announcement::find_by_id(announcement_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Announcement not found.".to_string()))?;

    authorize(actor, ResourceAction::DeleteAnnouncement)?;

    info!(announcement_id = %announcement.id, "Deleting announcement");

    Announcement::delete(announcement.id, &deps.db_pool).await?;

    Ok(())
}
