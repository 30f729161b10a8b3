//! Auth mutation actions
//!
//! Register and login are identity bootstrap: they run before a session
//! exists, so they are the only actions not routed through the resource
//! policy. Both still go through the same validation helpers and error
//! taxonomy as everything else.

use serde::Deserialize;
use tracing::info;

use crate::common::validate::{
    optional_text, optional_year, require_email, require_password, require_text,
    require_upload_path,
};
use crate::common::{
    authorize, require_actor, AccountStatus, Actor, ApiError, ApiResult, ResourceAction, Role,
};
use crate::domains::users::models::{CreateUser, User};
use crate::kernel::ServerDeps;

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
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
    #[serde(default)]
    pub bio: Option<String>,
    /// Relative path previously returned by the ID-document upload endpoint.
    #[serde(default)]
    pub id_document_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Create a student or mentor account. Verification starts at `pending`
/// and only an admin moves it from there.
pub async fn register(input: RegisterInput, deps: &ServerDeps) -> ApiResult<User> {
    let name = require_text("Name", &input.name, 100)?;
    let email = require_email(&input.email)?;
    require_password(&input.password)?;

    if input.role == Role::Admin {
        return Err(ApiError::Validation(
            "Registration is limited to student and mentor accounts.".to_string(),
        ));
    }

    let id_document_path = match input.id_document_path.as_deref() {
        Some(path) => Some(require_upload_path(path)?),
        None => None,
    };

    let create = CreateUser {
        name,
        email,
        password_hash: deps.password_hasher.hash(&input.password)?,
        role: input.role,
        roll_number: optional_text("Roll number", input.roll_number, 50)?,
        branch: optional_text("Branch", input.branch, 100)?,
        year: optional_year(input.year)?,
        company: optional_text("Company", input.company, 100)?,
        position: optional_text("Position", input.position, 100)?,
        expertise: optional_text("Expertise", input.expertise, 500)?,
        bio: optional_text("Bio", input.bio, 2000)?,
        id_document_path,
    };

    info!(email = %create.email, role = %create.role, "Registering account");

    // A duplicate email surfaces as a unique violation mapped to a 400.
    let user = User::create(create, &deps.db_pool)
        .await
        .map_err(ApiError::from_db)?;

    Ok(user)
}

/// Check credentials and return the account. The caller issues the session
/// token; inactive accounts never get one.
pub async fn login(input: LoginInput, deps: &ServerDeps) -> ApiResult<User> {
    let email = require_email(&input.email)?;

    let user = User::find_by_email(&email, &deps.db_pool).await?;

    // One failure message for unknown email and wrong password.
    let Some(user) = user else {
        return Err(ApiError::Validation(
            "Invalid email or password.".to_string(),
        ));
    };
    if !deps.password_hasher.verify(&input.password, &user.password_hash) {
        return Err(ApiError::Validation(
            "Invalid email or password.".to_string(),
        ));
    }

    if user.status == AccountStatus::Inactive {
        return Err(ApiError::Forbidden(
            "Your account has been deactivated.".to_string(),
        ));
    }

    info!(user_id = %user.id, "Login succeeded");

    Ok(user)
}

/// Rotate the caller's password after re-checking the current one.
pub async fn change_password(
    actor: Option<&Actor>,
    input: ChangePasswordInput,
    deps: &ServerDeps,
) -> ApiResult<()> {
    if input.current_password.is_empty() {
        return Err(ApiError::Validation(
            "Current password is required.".to_string(),
        ));
    }
    require_password(&input.new_password)?;

    authorize(actor, ResourceAction::ChangeOwnPassword)?;
    let actor = require_actor(actor)?;

    let user = User::find_by_id(actor.id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    if !deps
        .password_hasher
        .verify(&input.current_password, &user.password_hash)
    {
        return Err(ApiError::Validation(
            "Current password is incorrect.".to_string(),
        ));
    }

    let password_hash = deps.password_hasher.hash(&input.new_password)?;
    User::update_password(user.id, &password_hash, &deps.db_pool).await?;

    info!(user_id = %user.id, "Password changed");

    Ok(())
}

/// Self-service account deletion. Owned content cascades at the schema
/// level; the policy keeps admin accounts out of this path.
pub async fn delete_account(actor: Option<&Actor>, deps: &ServerDeps) -> ApiResult<()> {
    authorize(actor, ResourceAction::DeleteAccount)?;
    let actor = require_actor(actor)?;

    info!(user_id = %actor.id, "Deleting account");

    // Already-gone rows make this a no-op rather than an error.
    User::delete(actor.id, &deps.db_pool).await?;

    Ok(())
}
