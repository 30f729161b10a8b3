//! Mentorship domain - student-to-mentor requests
//!
//! A student opens a request against a verified, active mentor; from there
//! only that mentor or an admin moves it. The status graph is strict:
//! pending -> approved | rejected, approved -> completed, and the two end
//! states accept nothing further.

pub mod actions;
pub mod machines;
pub mod models;

pub use models::{MentorshipRequest, MentorshipRequestWithNames};
