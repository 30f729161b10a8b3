//! Mentorship request state machine
//!
//! Pure decision logic - NO IO, only state transitions.
//!
//! pending -> approved | rejected, approved -> completed. Rejected and
//! completed are terminal; a move out of them is an explicit error, never
//! a silent no-op.

use crate::common::{ApiError, MentorshipStatus};

/// Validates one status move.
pub fn mentorship_transition(
    from: MentorshipStatus,
    to: MentorshipStatus,
) -> Result<(), ApiError> {
    match (from, to) {
        (MentorshipStatus::Pending, MentorshipStatus::Approved)
        | (MentorshipStatus::Pending, MentorshipStatus::Rejected)
        | (MentorshipStatus::Approved, MentorshipStatus::Completed) => Ok(()),

        (MentorshipStatus::Rejected, _) => Err(ApiError::InvalidTransition(
            "This request has already been rejected.".to_string(),
        )),
        (MentorshipStatus::Completed, _) => Err(ApiError::InvalidTransition(
            "This request has already been completed.".to_string(),
        )),

        (from, to) => Err(ApiError::InvalidTransition(format!(
            "A request cannot move from {from} to {to}."
        ))),
    }
}
