//! Announcement query actions

use crate::common::{authorize, Actor, ApiResult, ResourceAction};
use crate::domains::announcements::models::Announcement;
use crate::kernel::ServerDeps;

/// Public list, newest first.
pub async fn list_announcements(
    actor: Option<&Actor>,
    deps: &ServerDeps,
) -> ApiResult<Vec<Announcement>> {
    authorize(actor, ResourceAction::ListAnnouncements)?;

    let announcements = Announcement::list(&deps.db_pool).await?;
    Ok(announcements)
}
