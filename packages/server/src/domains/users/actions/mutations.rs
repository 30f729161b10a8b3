//! User mutation actions
//!
//! Actions are self-contained orchestrators: validate input, load the
//! resource, consult the authorization policy, apply the machine, persist.

use serde::Deserialize;
use tracing::info;

use crate::common::validate::{optional_text, optional_year};
use crate::common::{
    authorize, require_actor, AccountStatus, Actor, ApiError, ApiResult, ResourceAction, UserId,
    VerificationStatus,
};
use crate::domains::users::machines::verification_transition;
use crate::domains::users::models::{UpdateProfile, User};
use crate::kernel::ServerDeps;

/// Profile fields a user may edit on their own account. Identity (email)
/// and access-control columns are not accepted here.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
}

/// Update the caller's own profile. Returns the fresh row.
pub async fn update_user_profile(
    actor: Option<&Actor>,
    input: UpdateProfileInput,
    deps: &ServerDeps,
) -> ApiResult<User> {
    let update = UpdateProfile {
        name: optional_text("Name", input.name, 100)?,
        bio: optional_text("Bio", input.bio, 2000)?,
        roll_number: optional_text("Roll number", input.roll_number, 50)?,
        branch: optional_text("Branch", input.branch, 100)?,
        year: optional_year(input.year)?,
        company: optional_text("Company", input.company, 100)?,
        position: optional_text("Position", input.position, 100)?,
        expertise: optional_text("Expertise", input.expertise, 500)?,
    };

    authorize(actor, ResourceAction::UpdateOwnProfile)?;
    let actor = require_actor(actor)?;

    info!(user_id = %actor.id, "Updating profile");

    User::update_profile(actor.id, update, &deps.db_pool)
        .await
        .map_err(ApiError::from_db)
}

/// Set a user's verification status (admin only). Any move is a valid
/// edge, including re-setting the current value.
pub async fn update_user_verification(
    actor: Option<&Actor>,
    user_id: UserId,
    to: VerificationStatus,
    deps: &ServerDeps,
) -> ApiResult<User> {
    let user = User::find_by_id(user_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    authorize(actor, ResourceAction::SetUserVerification)?;
    let to = verification_transition(user.verification_status, to)?;

    info!(user_id = %user.id, from = %user.verification_status, %to, "Setting verification status");

    User::set_verification(user.id, to, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))
}

/// Activate or deactivate an account (admin only). Deactivated accounts
/// stop resolving to an actor on their next request.
pub async fn update_user_status(
    actor: Option<&Actor>,
    user_id: UserId,
    to: AccountStatus,
    deps: &ServerDeps,
) -> ApiResult<User> {
    let user = User::find_by_id(user_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    authorize(actor, ResourceAction::SetUserAccountStatus)?;

    info!(user_id = %user.id, %to, "Setting account status");

    User::set_status(user.id, to, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))
}
