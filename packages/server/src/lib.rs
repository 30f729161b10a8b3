// CampusConnect - API Core
//
// Backend for a campus community platform connecting students with alumni
// mentors: moderated blog posts, Q&A with mentor-verified answers, and
// mentorship requests, all behind a role-based authorization policy.
//
// Pure decision logic (authorization, status machines) lives apart from IO
// in common/auth and domains/*/machines.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
