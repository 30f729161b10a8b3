//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use campus_core::common::{BlogId, UserId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let user_id: UserId = UserId::new();
//! let blog_id: BlogId = BlogId::new();
//!
//! // This would be a compile error:
//! // let wrong: BlogId = user_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (students, mentors, admins).
pub struct User;

/// Marker type for Blog entities (moderated posts).
pub struct Blog;

/// Marker type for Question entities (Q&A board questions).
pub struct Question;

/// Marker type for Answer entities (replies to questions).
pub struct Answer;

/// Marker type for MentorshipRequest entities.
pub struct MentorshipRequest;

/// Marker type for Announcement entities.
pub struct Announcement;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Blog entities.
pub type BlogId = Id<Blog>;

/// Typed ID for Question entities.
pub type QuestionId = Id<Question>;

/// Typed ID for Answer entities.
pub type AnswerId = Id<Answer>;

/// Typed ID for MentorshipRequest entities.
pub type MentorshipRequestId = Id<MentorshipRequest>;

/// Typed ID for Announcement entities.
pub type AnnouncementId = Id<Announcement>;
