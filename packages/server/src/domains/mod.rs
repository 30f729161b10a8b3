// Business domains
pub mod announcements;
pub mod auth;
pub mod blogs;
pub mod mentorship;
pub mod qa;
pub mod users;
