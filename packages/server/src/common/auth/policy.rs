//! The authorization policy. Pure decision logic - NO IO.
//!
//! Every store-touching operation maps to one [`ResourceAction`] carrying
//! the facts the decision needs (owner id, target mentor id, requested
//! target state). Actions load those facts, then call [`authorize`] before
//! any write. Identity bootstrap (register/login/logout) talks to the
//! session collaborator only and is not routed through this policy.

use super::actor::Actor;
use super::errors::AuthError;
use crate::common::entity_ids::UserId;
use crate::common::types::{BlogStatus, Role};

/// One authorizable operation with the resource facts it is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAction {
    // Public reads
    ListPublishedBlogs,
    ListQuestions,
    ViewQuestion,
    ListMentors,
    ListAnnouncements,
    /// Blog detail is public once published; otherwise owner or admin only.
    ViewBlog {
        author_id: UserId,
        status: BlogStatus,
    },

    // Self-service (any authenticated account)
    UpdateOwnProfile,
    ChangeOwnPassword,
    /// Admins are excluded; an admin removing their own account would have
    /// to go through operations, not the account page.
    DeleteAccount,
    /// Own-content listings: my blogs, my mentorship requests.
    ViewOwnContent,

    // Content creation
    CreateBlog,
    CreateQuestion,
    CreateAnswer,
    /// Students only; the action additionally checks the target is a
    /// verified active mentor.
    CreateMentorshipRequest,

    // Owner/admin content mutation
    EditBlog { author_id: UserId },
    DeleteBlog { author_id: UserId },
    SetBlogStatus { author_id: UserId, to: BlogStatus },
    EditQuestion { author_id: UserId },
    DeleteQuestion { author_id: UserId },
    DeleteAnswer { author_id: UserId },
    SetMentorshipStatus { mentor_user_id: UserId },

    // Moderation
    SetUserVerification,
    SetUserAccountStatus,
    ListUsers,
    ListPendingBlogs,
    CreateAnnouncement,
    DeleteAnnouncement,
}

impl ResourceAction {
    /// Rule 1 allow-side: reads that need no session at all. Blog detail
    /// joins this set only once the post is published.
    fn is_public(&self) -> bool {
        matches!(
            self,
            ResourceAction::ListPublishedBlogs
                | ResourceAction::ListQuestions
                | ResourceAction::ViewQuestion
                | ResourceAction::ListMentors
                | ResourceAction::ListAnnouncements
                | ResourceAction::ViewBlog {
                    status: BlogStatus::Published,
                    ..
                }
        )
    }

    /// Rule 2: everything an admin may do regardless of ownership.
    /// Moderation (status fields, announcements, review listings) plus the
    /// content-removal rights admins hold.
    fn admin_allowed(&self) -> bool {
        matches!(
            self,
            ResourceAction::SetUserVerification
                | ResourceAction::SetUserAccountStatus
                | ResourceAction::SetBlogStatus { .. }
                | ResourceAction::SetMentorshipStatus { .. }
                | ResourceAction::CreateAnnouncement
                | ResourceAction::DeleteAnnouncement
                | ResourceAction::ListUsers
                | ResourceAction::ListPendingBlogs
                | ResourceAction::DeleteBlog { .. }
                | ResourceAction::EditQuestion { .. }
                | ResourceAction::DeleteQuestion { .. }
                | ResourceAction::DeleteAnswer { .. }
                | ResourceAction::ViewBlog { .. }
        )
    }
}

/// Unwraps the caller for operations that need the concrete identity after
/// the policy check (stamping, ownership writes). Anonymous callers get the
/// same denial [`authorize`] would produce.
pub fn require_actor(actor: Option<&Actor>) -> Result<&Actor, AuthError> {
    actor.ok_or(AuthError::AuthenticationRequired)
}

/// Decides whether `actor` may perform `action`.
///
/// Rules, in precedence order:
/// 1. no actor: public reads pass, everything else needs authentication;
/// 2. inactive accounts are denied outright;
/// 3. admins pass for moderation and content removal (but never
///    self-service account deletion);
/// 4. owners pass for their own content, with blog status restricted to
///    resubmission; the target mentor passes for that request's status;
/// 5. remaining authenticated-only actions pass for any active account;
///    everything else is denied.
pub fn authorize(actor: Option<&Actor>, action: ResourceAction) -> Result<(), AuthError> {
    if action.is_public() {
        return Ok(());
    }

    let actor = actor.ok_or(AuthError::AuthenticationRequired)?;

    if !actor.is_active() {
        return Err(AuthError::PermissionDenied(
            "Your account has been deactivated.".to_string(),
        ));
    }

    // Checked before the blanket admin allowance on purpose.
    if let ResourceAction::DeleteAccount = action {
        if actor.is_admin() {
            return Err(AuthError::PermissionDenied(
                "Admin accounts cannot be deleted from the account page.".to_string(),
            ));
        }
        return Ok(());
    }

    if actor.is_admin() && action.admin_allowed() {
        return Ok(());
    }

    match action {
        // Owner rules
        ResourceAction::EditBlog { author_id }
        | ResourceAction::DeleteBlog { author_id }
        | ResourceAction::EditQuestion { author_id }
        | ResourceAction::DeleteQuestion { author_id }
        | ResourceAction::DeleteAnswer { author_id }
        | ResourceAction::ViewBlog { author_id, .. }
            if author_id == actor.id =>
        {
            Ok(())
        }

        // Owners may only send a post back for review, never release it.
        ResourceAction::SetBlogStatus { author_id, to } if author_id == actor.id => {
            if to == BlogStatus::Pending {
                Ok(())
            } else {
                Err(AuthError::PermissionDenied(
                    "Only an admin can publish or reject a post.".to_string(),
                ))
            }
        }

        // The target mentor may move that specific request.
        ResourceAction::SetMentorshipStatus { mentor_user_id }
            if mentor_user_id == actor.id =>
        {
            Ok(())
        }

        // Authenticated-only actions open to every active account.
        ResourceAction::UpdateOwnProfile
        | ResourceAction::ChangeOwnPassword
        | ResourceAction::ViewOwnContent
        | ResourceAction::CreateBlog
        | ResourceAction::CreateQuestion
        | ResourceAction::CreateAnswer => Ok(()),

        ResourceAction::CreateMentorshipRequest => {
            if actor.role == Role::Student {
                Ok(())
            } else {
                Err(AuthError::PermissionDenied(
                    "Only students can request mentorship.".to_string(),
                ))
            }
        }

        // Moderation actions reaching here came from a non-admin.
        ResourceAction::SetUserVerification
        | ResourceAction::SetUserAccountStatus
        | ResourceAction::ListUsers
        | ResourceAction::ListPendingBlogs
        | ResourceAction::CreateAnnouncement
        | ResourceAction::DeleteAnnouncement => Err(AuthError::AdminRequired),

        // Non-owner touching someone else's resource.
        _ => Err(AuthError::PermissionDenied(
            "You do not have access to this resource.".to_string(),
        )),
    }
}
