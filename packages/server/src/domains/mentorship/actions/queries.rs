//! Mentorship query actions

use crate::common::{authorize, require_actor, Actor, ApiResult, ResourceAction, Role};
use crate::domains::mentorship::models::{MentorshipRequest, MentorshipRequestWithNames};
use crate::kernel::ServerDeps;

/// Requests visible to the caller: admins see everything, mentors see
/// requests targeting them, students see their own.
pub async fn list_mentorship_requests(
    actor: Option<&Actor>,
    deps: &ServerDeps,
) -> ApiResult<Vec<MentorshipRequestWithNames>> {
    authorize(actor, ResourceAction::ViewOwnContent)?;
    let actor = require_actor(actor)?;

    let requests = match actor.role {
        Role::Admin => MentorshipRequest::list_all(&deps.db_pool).await?,
        Role::Mentor => MentorshipRequest::list_for_mentor(actor.id, &deps.db_pool).await?,
        Role::Student => MentorshipRequest::list_for_student(actor.id, &deps.db_pool).await?,
    };

    Ok(requests)
}
