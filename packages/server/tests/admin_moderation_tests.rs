//! Integration tests for admin moderation: the verification queue, account
//! activation, the user listing, the mentor directory, and announcements.
//!
//! These tests need a local Docker daemon for the Postgres container; run
//! them with `cargo test -- --ignored`.

mod common;

use crate::common::{
    create_admin, create_approved_mentor, create_mentor, create_student, unique_email, TestHarness,
};
use campus_core::common::types::{AccountStatus, VerificationStatus};
use campus_core::domains::announcements::models::Announcement;
use campus_core::domains::users::User;
use serde_json::json;
use test_context::test_context;

// =============================================================================
// Verification queue
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn admins_move_accounts_through_the_verification_queue(ctx: &TestHarness) {
    let client = ctx.client();
    let student = create_student(&ctx.deps, &unique_email("applicant")).await.unwrap();
    let admin = create_admin(&ctx.deps, &unique_email("registrar")).await.unwrap();
    let admin_token = ctx.token_for(admin.id).await;

    assert_eq!(student.verification_status, VerificationStatus::Pending);

    let (status, body) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_verification",
                "user_id": student.id,
                "verification_status": "approved"
            }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    let row = User::find_by_id(student.id, &ctx.db_pool).await.unwrap().unwrap();
    assert_eq!(row.verification_status, VerificationStatus::Approved);

    // Re-setting the same state is a valid no-op edge, not an error.
    let (status, _) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_verification",
                "user_id": student.id,
                "verification_status": "approved"
            }),
        )
        .await;
    assert_eq!(status, 200);

    let (status, _) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_verification",
                "user_id": student.id,
                "verification_status": "rejected"
            }),
        )
        .await;
    assert_eq!(status, 200);
    let row = User::find_by_id(student.id, &ctx.db_pool).await.unwrap().unwrap();
    assert_eq!(row.verification_status, VerificationStatus::Rejected);
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn moderation_requires_the_admin_role(ctx: &TestHarness) {
    let client = ctx.client();
    let student = create_student(&ctx.deps, &unique_email("civilian")).await.unwrap();
    let target = create_student(&ctx.deps, &unique_email("subject")).await.unwrap();
    let token = ctx.token_for(student.id).await;

    for request in [
        json!({
            "action": "update_user_verification",
            "user_id": target.id,
            "verification_status": "approved"
        }),
        json!({
            "action": "update_user_status",
            "user_id": target.id,
            "status": "inactive"
        }),
        json!({ "action": "list_users" }),
    ] {
        let (status, body) = client.act(Some(&token), request.clone()).await;
        assert_eq!(status, 403, "student must not run {request}");
        assert_eq!(body["error"], "Admin access required");

        let (status, _) = client.act(None, request).await;
        assert_eq!(status, 401);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn moderating_a_missing_user_is_a_not_found(ctx: &TestHarness) {
    let client = ctx.client();
    let admin = create_admin(&ctx.deps, &unique_email("blindfold")).await.unwrap();
    let admin_token = ctx.token_for(admin.id).await;
    let ghost = uuid::Uuid::new_v4().to_string();

    let (status, body) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_verification",
                "user_id": ghost,
                "verification_status": "approved"
            }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "User not found.");

    let (status, body) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_status",
                "user_id": ghost,
                "status": "active"
            }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "User not found.");
}

// =============================================================================
// Account activation
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn deactivated_accounts_can_be_reactivated(ctx: &TestHarness) {
    let client = ctx.client();
    let student = create_student(&ctx.deps, &unique_email("suspended")).await.unwrap();
    let admin = create_admin(&ctx.deps, &unique_email("warden")).await.unwrap();
    let admin_token = ctx.token_for(admin.id).await;

    let (status, _) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_status",
                "user_id": student.id,
                "status": "inactive"
            }),
        )
        .await;
    assert_eq!(status, 200);
    let row = User::find_by_id(student.id, &ctx.db_pool).await.unwrap().unwrap();
    assert_eq!(row.status, AccountStatus::Inactive);

    let (status, _) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "update_user_status",
                "user_id": student.id,
                "status": "active"
            }),
        )
        .await;
    assert_eq!(status, 200);
    let row = User::find_by_id(student.id, &ctx.db_pool).await.unwrap().unwrap();
    assert_eq!(row.status, AccountStatus::Active);
}

// =============================================================================
// User listing
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn the_user_listing_filters_by_verification_status(ctx: &TestHarness) {
    let client = ctx.client();
    let student = create_student(&ctx.deps, &unique_email("filtered")).await.unwrap();
    let admin = create_admin(&ctx.deps, &unique_email("counter")).await.unwrap();

    let (status, body) = client
        .act(
            Some(&ctx.token_for(admin.id).await),
            json!({
                "action": "list_users",
                "verification_status": "pending",
                "per_page": 100
            }),
        )
        .await;

    assert_eq!(status, 200);
    let users = body["users"].as_array().unwrap();
    assert!(users.iter().any(|u| u["id"] == student.id.to_string()));
    for user in users {
        assert_eq!(user["verification_status"], "pending");
        // The credential hash never leaves the server.
        assert!(user.get("password_hash").is_none());
    }
}

// =============================================================================
// Mentor directory
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn the_mentor_directory_lists_approved_active_mentors_only(ctx: &TestHarness) {
    let client = ctx.client();
    let approved = create_approved_mentor(&ctx.deps, &unique_email("listed"))
        .await
        .unwrap();
    let unverified = create_mentor(&ctx.deps, &unique_email("waiting")).await.unwrap();
    let deactivated = create_approved_mentor(&ctx.deps, &unique_email("benched"))
        .await
        .unwrap();
    User::set_status(deactivated.id, AccountStatus::Inactive, &ctx.db_pool)
        .await
        .unwrap();

    let (status, body) = client
        .act(None, json!({ "action": "list_mentors", "per_page": 100 }))
        .await;

    assert_eq!(status, 200);
    let mentors = body["mentors"].as_array().unwrap();
    let ids: Vec<&str> = mentors.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert!(ids.contains(&approved.id.to_string().as_str()));
    assert!(!ids.contains(&unverified.id.to_string().as_str()));
    assert!(!ids.contains(&deactivated.id.to_string().as_str()));

    // Directory entries are the public card, not the account row.
    let entry = mentors
        .iter()
        .find(|m| m["id"] == approved.id.to_string())
        .unwrap();
    assert!(entry["company"].is_string());
    assert!(entry.get("email").is_none());
    assert!(entry.get("password_hash").is_none());
}

// =============================================================================
// Announcements
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn announcements_are_admin_authored_and_publicly_readable(ctx: &TestHarness) {
    let client = ctx.client();
    let student = create_student(&ctx.deps, &unique_email("reader")).await.unwrap();
    let admin = create_admin(&ctx.deps, &unique_email("speaker")).await.unwrap();
    let admin_token = ctx.token_for(admin.id).await;

    let (status, body) = client
        .act(
            Some(&ctx.token_for(student.id).await),
            json!({
                "action": "create_announcement",
                "title": "Unofficial notice",
                "content": "From a student."
            }),
        )
        .await;
    assert_eq!(status, 403);
    assert_eq!(body["error"], "Admin access required");

    let (status, body) = client
        .act(
            Some(&admin_token),
            json!({
                "action": "create_announcement",
                "title": "Exam hall change",
                "content": "CS301 moves to Hall B on Friday."
            }),
        )
        .await;
    assert_eq!(status, 200);
    let id = body["id"].as_str().expect("announcement id").to_string();

    // Anyone may read the board; newest entries come first.
    let (status, body) = client.act(None, json!({ "action": "list_announcements" })).await;
    assert_eq!(status, 200);
    let announcements = body["announcements"].as_array().unwrap();
    assert_eq!(announcements[0]["id"], id);
    assert_eq!(announcements[0]["title"], "Exam hall change");

    let (status, _) = client
        .act(
            Some(&ctx.token_for(student.id).await),
            json!({ "action": "delete_announcement", "announcement_id": id }),
        )
        .await;
    assert_eq!(status, 403);

    let (status, _) = client
        .act(
            Some(&admin_token),
            json!({ "action": "delete_announcement", "announcement_id": id }),
        )
        .await;
    assert_eq!(status, 200);

    let gone = Announcement::find_by_id(id.parse().unwrap(), &ctx.db_pool)
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore]
async fn deleting_a_missing_announcement_is_a_not_found(ctx: &TestHarness) {
    let client = ctx.client();
    let admin = create_admin(&ctx.deps, &unique_email("mistaken")).await.unwrap();

    let (status, body) = client
        .act(
            Some(&ctx.token_for(admin.id).await),
            json!({
                "action": "delete_announcement",
                "announcement_id": uuid::Uuid::new_v4().to_string()
            }),
        )
        .await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "Announcement not found.");
}
