//! Test fixtures for creating test data.
//!
//! Accounts go through the real register action so rows are shaped exactly
//! like production data; admin accounts and moderation states are set
//! through the model methods the real actions use.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use campus_core::common::types::{BlogStatus, Role, VerificationStatus};
use campus_core::common::UserId;
use campus_core::domains::auth::actions::{register, RegisterInput};
use campus_core::domains::blogs::models::{Blog, CreateBlog};
use campus_core::domains::mentorship::models::MentorshipRequest;
use campus_core::domains::qa::models::{CreateQuestion, Question};
use campus_core::domains::users::User;
use campus_core::kernel::ServerDeps;

/// Password every fixture account logs in with.
pub const TEST_PASSWORD: &str = "sturdy-password-1";

/// Emails must be unique across the shared test database.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.edu", Uuid::new_v4())
}

/// Register a student through the real action (starts unverified).
pub async fn create_student(deps: &ServerDeps, email: &str) -> Result<User> {
    let user = register(
        RegisterInput {
            name: "Test Student".to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            role: Role::Student,
            roll_number: Some("CS21B001".to_string()),
            branch: Some("CSE".to_string()),
            year: Some(3),
            company: None,
            position: None,
            expertise: None,
            bio: None,
            id_document_path: None,
        },
        deps,
    )
    .await?;
    Ok(user)
}

/// Register a mentor through the real action (starts unverified).
pub async fn create_mentor(deps: &ServerDeps, email: &str) -> Result<User> {
    let user = register(
        RegisterInput {
            name: "Test Mentor".to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            role: Role::Mentor,
            roll_number: None,
            branch: None,
            year: None,
            company: Some("Acme Systems".to_string()),
            position: Some("Staff Engineer".to_string()),
            expertise: Some("Distributed systems".to_string()),
            bio: Some("Happy to help.".to_string()),
            id_document_path: None,
        },
        deps,
    )
    .await?;
    Ok(user)
}

/// Register a mentor and approve them so mentorship requests may target
/// them.
pub async fn create_approved_mentor(deps: &ServerDeps, email: &str) -> Result<User> {
    let mentor = create_mentor(deps, email).await?;
    let approved = User::set_verification(mentor.id, VerificationStatus::Approved, &deps.db_pool)
        .await?
        .expect("mentor row exists");
    Ok(approved)
}

/// Seed an admin account. The register action refuses the admin role, so
/// this goes through the same insert the create_admin CLI uses.
pub async fn create_admin(deps: &ServerDeps, email: &str) -> Result<User> {
    let hash = deps.password_hasher.hash(TEST_PASSWORD)?;
    let user = User::create_admin("Test Admin", email, &hash, &deps.db_pool).await?;
    Ok(user)
}

/// Create a blog post in a given moderation state. Published and rejected
/// posts carry the approving admin's stamp when one is supplied.
pub async fn create_blog_with_status(
    pool: &PgPool,
    author_id: UserId,
    title: &str,
    status: BlogStatus,
    approved_by: Option<UserId>,
) -> Result<Blog> {
    let blog = Blog::create(
        CreateBlog {
            author_id,
            title: title.to_string(),
            content: "Fixture body with enough words to count a read.".to_string(),
            excerpt: "Fixture excerpt.".to_string(),
            category: "general".to_string(),
        },
        pool,
    )
    .await?;

    if status == BlogStatus::Pending {
        return Ok(blog);
    }

    let updated = match approved_by {
        Some(admin_id) => Blog::set_status_stamped(blog.id, status, admin_id, pool).await?,
        None => Blog::set_status_cleared(blog.id, status, pool).await?,
    };
    Ok(updated.expect("blog row exists"))
}

/// Open a pending mentorship request between an existing student and
/// mentor pair.
pub async fn create_request(
    pool: &PgPool,
    student_id: UserId,
    mentor_user_id: UserId,
) -> Result<MentorshipRequest> {
    let request = MentorshipRequest::create(student_id, mentor_user_id, None, pool).await?;
    Ok(request)
}

/// Create a question owned by the given author.
pub async fn create_question(pool: &PgPool, author_id: UserId, title: &str) -> Result<Question> {
    let question = Question::create(
        CreateQuestion {
            author_id,
            title: title.to_string(),
            content: "Fixture question content.".to_string(),
        },
        pool,
    )
    .await?;
    Ok(question)
}
