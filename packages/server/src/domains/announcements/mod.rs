//! Announcements domain - admin broadcasts, visible to everyone

pub mod actions;
pub mod models;

pub use models::Announcement;
