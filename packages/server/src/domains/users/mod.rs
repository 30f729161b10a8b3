//! Users domain - accounts, roles, verification
//!
//! Registration creates every account in `pending` verification; only admin
//! actions move verification or account status afterwards.

pub mod actions;
pub mod machines;
pub mod models;

pub use models::{CreateUser, MentorSummary, UpdateProfile, User};
