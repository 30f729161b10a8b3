//! Blog status state machine
//!
//! Pure decision logic - NO IO, only state transitions.
//!
//! Admins move a post along any edge. Owners hold exactly one edge:
//! published|rejected -> pending, the resubmission after an edit or a
//! rejection. The stamp decision returned here must be written atomically
//! with the status itself.

use crate::common::{ApiError, BlogStatus};

/// Who is asking for the move. The policy has already narrowed the caller
/// to one of these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorClass {
    Admin,
    Owner,
}

/// What the status write must do to `approved_by`/`approved_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStamp {
    /// Record the acting admin and the moderation time.
    Set,
    /// Null both fields; the prior decision no longer covers the content.
    Clear,
}

/// Validates one status move and returns the stamp side effect that must
/// land in the same write.
pub fn blog_transition(
    by: ActorClass,
    from: BlogStatus,
    to: BlogStatus,
) -> Result<ApprovalStamp, ApiError> {
    match by {
        ActorClass::Admin => match to {
            BlogStatus::Published | BlogStatus::Rejected => Ok(ApprovalStamp::Set),
            BlogStatus::Pending => Ok(ApprovalStamp::Clear),
        },
        ActorClass::Owner => match (from, to) {
            (BlogStatus::Published | BlogStatus::Rejected, BlogStatus::Pending) => {
                Ok(ApprovalStamp::Clear)
            }
            (BlogStatus::Pending, BlogStatus::Pending) => Err(ApiError::InvalidTransition(
                "Post is already pending review.".to_string(),
            )),
            // The policy denies owner publish/reject before this point;
            // the arm stays so the match is total over both enums.
            _ => Err(ApiError::InvalidTransition(
                "Only an admin can publish or reject a post.".to_string(),
            )),
        },
    }
}
