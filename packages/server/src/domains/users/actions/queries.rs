//! User query actions

use crate::common::{
    authorize, Actor, ApiResult, PageArgs, ResourceAction, VerificationStatus,
};
use crate::domains::users::models::{MentorSummary, User};
use crate::kernel::ServerDeps;

/// Admin listing of all accounts, optionally filtered by verification
/// status.
pub async fn list_users(
    actor: Option<&Actor>,
    verification: Option<VerificationStatus>,
    page: PageArgs,
    deps: &ServerDeps,
) -> ApiResult<Vec<User>> {
    let args = page.validate()?;
    authorize(actor, ResourceAction::ListUsers)?;

    let users = User::list(verification, &args, &deps.db_pool).await?;
    Ok(users)
}

/// Public mentor directory: approved, active mentors only.
pub async fn list_mentors(
    actor: Option<&Actor>,
    page: PageArgs,
    deps: &ServerDeps,
) -> ApiResult<Vec<MentorSummary>> {
    let args = page.validate()?;
    authorize(actor, ResourceAction::ListMentors)?;

    let mentors = User::list_mentors(&args, &deps.db_pool).await?;
    Ok(mentors)
}
