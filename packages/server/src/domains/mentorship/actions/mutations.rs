//! Mentorship mutation actions

use tracing::info;

use crate::common::validate::optional_text;
use crate::common::{
    authorize, require_actor, AccountStatus, Actor, ApiError, ApiResult, MentorshipRequestId,
    MentorshipStatus, ResourceAction, Role, UserId, VerificationStatus,
};
use crate::domains::mentorship::machines::mentorship_transition;
use crate::domains::mentorship::models::MentorshipRequest;
use crate::domains::users::models::User;
use crate::kernel::ServerDeps;

/// Open a request against a mentor. Students only (policy); the target
/// must be an approved, active mentor, and one open request per pair is
/// enforced by the store.
pub async fn create_mentorship_request(
    actor: Option<&Actor>,
    mentor_user_id: UserId,
    message: Option<String>,
    deps: &ServerDeps,
) -> ApiResult<MentorshipRequest> {
    let message = optional_text("Message", message, 1000)?;

    authorize(actor, ResourceAction::CreateMentorshipRequest)?;
    let actor = require_actor(actor)?;

    // The target has to be someone the mentor directory would actually
    // list; anything else gets one uniform error.
    let mentor = User::find_by_id(mentor_user_id, &deps.db_pool).await?;
    let valid_target = mentor.as_ref().is_some_and(|m| {
        m.role == Role::Mentor
            && m.verification_status == VerificationStatus::Approved
            && m.status == AccountStatus::Active
    });
    if !valid_target {
        return Err(ApiError::Validation("Invalid mentor selected.".to_string()));
    }

    info!(student_id = %actor.id, mentor_id = %mentor_user_id, "Creating mentorship request");

    let request =
        MentorshipRequest::create(actor.id, mentor_user_id, message.as_deref(), &deps.db_pool)
            .await
            .map_err(ApiError::from_db)?;

    Ok(request)
}

/// Move a request along one status edge (target mentor or admin). The
/// write is a compare-and-set against the status the decision saw.
pub async fn update_mentorship_request_status(
    actor: Option<&Actor>,
    request_id: MentorshipRequestId,
    to: MentorshipStatus,
    deps: &ServerDeps,
) -> ApiResult<MentorshipRequest> {
    let request = MentorshipRequest::find_by_id(request_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mentorship request not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::SetMentorshipStatus {
            mentor_user_id: request.mentor_user_id,
        },
    )?;
    mentorship_transition(request.status, to)?;

    info!(request_id = %request.id, from = %request.status, %to, "Setting mentorship request status");

    let updated =
        MentorshipRequest::update_status_from(request.id, request.status, to, &deps.db_pool)
            .await?;

    match updated {
        Some(request) => Ok(request),
        // The CAS missed: the status moved between read and write. Judge
        // the requested edge against the fresh state.
        None => {
            let current = MentorshipRequest::find_by_id(request.id, &deps.db_pool)
                .await?
                .ok_or_else(|| {
                    ApiError::NotFound("Mentorship request not found.".to_string())
                })?;
            mentorship_transition(current.status, to)?;
            Err(ApiError::InvalidTransition(
                "The request was updated concurrently. Try again.".to_string(),
            ))
        }
    }
}
