//! Single JSON dispatch endpoint for every platform operation.
//!
//! Bodies are `{"action": "...", ...fields}`. The tagged enum below gives
//! each operation a typed shape before any handler logic runs; an unknown
//! action or malformed field fails deserialization and comes back as a
//! validation error.

use axum::{extract::Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::{
    AccountStatus, AnnouncementId, AnswerId, ApiError, ApiResult, BlogId, BlogStatus,
    MentorshipRequestId, MentorshipStatus, PageArgs, QuestionId, UserId, VerificationStatus,
};
use crate::domains::{announcements, auth, blogs, mentorship, qa, users};
use crate::server::app::AppState;
use crate::server::middleware::AuthContext;

/// Every operation the API accepts, tagged by the `action` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ApiRequest {
    // Accounts and sessions
    Register(auth::actions::RegisterInput),
    Login(auth::actions::LoginInput),
    Logout,
    ChangePassword(auth::actions::ChangePasswordInput),
    DeleteAccount,
    UpdateUserProfile(users::actions::UpdateProfileInput),

    // Admin moderation of users
    UpdateUserVerification {
        user_id: UserId,
        verification_status: VerificationStatus,
    },
    UpdateUserStatus {
        user_id: UserId,
        status: AccountStatus,
    },
    ListUsers {
        #[serde(default)]
        verification_status: Option<VerificationStatus>,
        #[serde(flatten)]
        page: PageArgs,
    },

    // Mentor directory
    ListMentors {
        #[serde(flatten)]
        page: PageArgs,
    },

    // Blog posts
    CreateBlog(blogs::actions::CreateBlogInput),
    UpdateBlog(blogs::actions::UpdateBlogInput),
    UpdateBlogStatus {
        blog_id: BlogId,
        status: BlogStatus,
    },
    DeleteBlog {
        blog_id: BlogId,
    },
    ListBlogs {
        #[serde(default)]
        category: Option<String>,
        #[serde(flatten)]
        page: PageArgs,
    },
    GetBlogDetail {
        blog_id: BlogId,
    },
    ListMyBlogs,
    ListPendingBlogs {
        #[serde(flatten)]
        page: PageArgs,
    },

    // Q&A
    CreateQuestion(qa::actions::CreateQuestionInput),
    UpdateQuestion(qa::actions::UpdateQuestionInput),
    DeleteQuestion {
        question_id: QuestionId,
    },
    ListQuestions {
        #[serde(flatten)]
        page: PageArgs,
    },
    GetQuestionDetail {
        question_id: QuestionId,
    },
    CreateAnswer {
        question_id: QuestionId,
        content: String,
    },
    DeleteAnswer {
        answer_id: AnswerId,
    },

    // Mentorship
    CreateMentorshipRequest {
        mentor_user_id: UserId,
        #[serde(default)]
        message: Option<String>,
    },
    UpdateMentorshipRequestStatus {
        request_id: MentorshipRequestId,
        status: MentorshipStatus,
    },
    ListMentorshipRequests,

    // Announcements
    CreateAnnouncement {
        title: String,
        content: String,
    },
    DeleteAnnouncement {
        announcement_id: AnnouncementId,
    },
    ListAnnouncements,
}

/// Dispatch handler for `POST /api/actions`
pub async fn actions_handler(
    Extension(state): Extension<AppState>,
    Extension(auth_ctx): Extension<AuthContext>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let request: ApiRequest = serde_json::from_value(body)
        .map_err(|err| ApiError::Validation(format!("Invalid request: {err}")))?;

    dispatch(request, &auth_ctx, &state).await.map(Json)
}

async fn dispatch(request: ApiRequest, auth: &AuthContext, state: &AppState) -> ApiResult<Value> {
    let actor = auth.actor.as_ref();
    let deps = &state.deps;

    match request {
        // Accounts and sessions
        ApiRequest::Register(input) => {
            let user = auth::actions::register(input, deps).await?;
            Ok(json!({ "success": true, "user": user }))
        }
        ApiRequest::Login(input) => {
            let user = auth::actions::login(input, deps).await?;
            let token = state.sessions.create_session(user.id).await;
            Ok(json!({ "success": true, "token": token, "user": user }))
        }
        ApiRequest::Logout => {
            if let Some(token) = &auth.token {
                state.sessions.delete_session(token).await;
            }
            Ok(json!({ "success": true }))
        }
        ApiRequest::ChangePassword(input) => {
            auth::actions::change_password(actor, input, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::DeleteAccount => {
            auth::actions::delete_account(actor, deps).await?;
            if let Some(actor) = actor {
                state.sessions.delete_sessions_for(actor.id).await;
            }
            Ok(json!({ "success": true }))
        }
        ApiRequest::UpdateUserProfile(input) => {
            let user = users::actions::update_user_profile(actor, input, deps).await?;
            Ok(json!({ "success": true, "user": user }))
        }

        // Admin moderation of users
        ApiRequest::UpdateUserVerification {
            user_id,
            verification_status,
        } => {
            users::actions::update_user_verification(actor, user_id, verification_status, deps)
                .await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::UpdateUserStatus { user_id, status } => {
            let user = users::actions::update_user_status(actor, user_id, status, deps).await?;
            if user.status == AccountStatus::Inactive {
                state.sessions.delete_sessions_for(user.id).await;
            }
            Ok(json!({ "success": true }))
        }
        ApiRequest::ListUsers {
            verification_status,
            page,
        } => {
            let list = users::actions::list_users(actor, verification_status, page, deps).await?;
            Ok(json!({ "success": true, "users": list }))
        }

        // Mentor directory
        ApiRequest::ListMentors { page } => {
            let mentors = users::actions::list_mentors(actor, page, deps).await?;
            Ok(json!({ "success": true, "mentors": mentors }))
        }

        // Blog posts
        ApiRequest::CreateBlog(input) => {
            let blog = blogs::actions::create_blog(actor, input, deps).await?;
            Ok(json!({ "success": true, "id": blog.id }))
        }
        ApiRequest::UpdateBlog(input) => {
            blogs::actions::update_blog(actor, input, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::UpdateBlogStatus { blog_id, status } => {
            blogs::actions::set_blog_status(actor, blog_id, status, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::DeleteBlog { blog_id } => {
            blogs::actions::delete_blog(actor, blog_id, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::ListBlogs { category, page } => {
            let list = blogs::actions::list_blogs(actor, category, page, deps).await?;
            Ok(json!({ "success": true, "blogs": list }))
        }
        ApiRequest::GetBlogDetail { blog_id } => {
            let blog = blogs::actions::get_blog_detail(actor, blog_id, deps).await?;
            Ok(json!({ "success": true, "blog": blog }))
        }
        ApiRequest::ListMyBlogs => {
            let list = blogs::actions::list_my_blogs(actor, deps).await?;
            Ok(json!({ "success": true, "blogs": list }))
        }
        ApiRequest::ListPendingBlogs { page } => {
            let list = blogs::actions::list_pending_blogs(actor, page, deps).await?;
            Ok(json!({ "success": true, "blogs": list }))
        }

        // Q&A
        ApiRequest::CreateQuestion(input) => {
            let question = qa::actions::create_question(actor, input, deps).await?;
            Ok(json!({ "success": true, "id": question.id }))
        }
        ApiRequest::UpdateQuestion(input) => {
            qa::actions::update_question(actor, input, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::DeleteQuestion { question_id } => {
            qa::actions::delete_question(actor, question_id, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::ListQuestions { page } => {
            let list = qa::actions::list_questions(actor, page, deps).await?;
            Ok(json!({ "success": true, "questions": list }))
        }
        ApiRequest::GetQuestionDetail { question_id } => {
            let detail = qa::actions::get_question_detail(actor, question_id, deps).await?;
            Ok(json!({
                "success": true,
                "question": detail.question,
                "answers": detail.answers,
            }))
        }
        ApiRequest::CreateAnswer {
            question_id,
            content,
        } => {
            let answer = qa::actions::create_answer(actor, question_id, content, deps).await?;
            Ok(json!({ "success": true, "id": answer.id }))
        }
        ApiRequest::DeleteAnswer { answer_id } => {
            qa::actions::delete_answer(actor, answer_id, deps).await?;
            Ok(json!({ "success": true }))
        }

        // Mentorship
        ApiRequest::CreateMentorshipRequest {
            mentor_user_id,
            message,
        } => {
            mentorship::actions::create_mentorship_request(actor, mentor_user_id, message, deps)
                .await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::UpdateMentorshipRequestStatus { request_id, status } => {
            mentorship::actions::update_mentorship_request_status(actor, request_id, status, deps)
                .await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::ListMentorshipRequests => {
            let requests = mentorship::actions::list_mentorship_requests(actor, deps).await?;
            Ok(json!({ "success": true, "requests": requests }))
        }

        // Announcements
        ApiRequest::CreateAnnouncement { title, content } => {
            let announcement =
                announcements::actions::create_announcement(actor, title, content, deps).await?;
            Ok(json!({ "success": true, "id": announcement.id }))
        }
        ApiRequest::DeleteAnnouncement { announcement_id } => {
            announcements::actions::delete_announcement(actor, announcement_id, deps).await?;
            Ok(json!({ "success": true }))
        }
        ApiRequest::ListAnnouncements => {
            let list = announcements::actions::list_announcements(actor, deps).await?;
            Ok(json!({ "success": true, "announcements": list }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn parse(value: Value) -> Result<ApiRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_parses_tagged_create_blog() {
        let request = parse(json!({
            "action": "create_blog",
            "title": "Surviving first year",
            "content": "Some advice."
        }))
        .unwrap();

        match request {
            ApiRequest::CreateBlog(input) => {
                assert_eq!(input.title, "Surviving first year");
                assert!(input.excerpt.is_none());
                assert!(input.category.is_none());
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_parses_unit_action_without_fields() {
        assert!(matches!(parse(json!({ "action": "logout" })), Ok(ApiRequest::Logout)));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(parse(json!({ "action": "drop_everything" })).is_err());
    }

    #[test]
    fn test_missing_action_field_is_rejected() {
        assert!(parse(json!({ "title": "no action here" })).is_err());
    }

    #[test]
    fn test_status_fields_deserialize_into_enums() {
        let request = parse(json!({
            "action": "update_blog_status",
            "blog_id": Uuid::new_v4().to_string(),
            "status": "published"
        }))
        .unwrap();

        match request {
            ApiRequest::UpdateBlogStatus { status, .. } => {
                assert_eq!(status, BlogStatus::Published);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_status_value_is_rejected() {
        let result = parse(json!({
            "action": "update_blog_status",
            "blog_id": Uuid::new_v4().to_string(),
            "status": "live"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_fields_flatten_into_list_actions() {
        let request = parse(json!({
            "action": "list_blogs",
            "category": "placements",
            "page": 2,
            "per_page": 50
        }))
        .unwrap();

        match request {
            ApiRequest::ListBlogs { category, page } => {
                assert_eq!(category.as_deref(), Some("placements"));
                assert_eq!(page.page, Some(2));
                assert_eq!(page.per_page, Some(50));
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_list_actions_default_their_optional_fields() {
        let request = parse(json!({ "action": "list_users" })).unwrap();

        match request {
            ApiRequest::ListUsers {
                verification_status,
                page,
            } => {
                assert!(verification_status.is_none());
                assert!(page.page.is_none());
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_register_parses_role_and_optional_attributes() {
        let request = parse(json!({
            "action": "register",
            "name": "Asha",
            "email": "asha@example.edu",
            "password": "long-enough-pw",
            "role": "student",
            "roll_number": "CS21B042"
        }))
        .unwrap();

        match request {
            ApiRequest::Register(input) => {
                assert_eq!(input.roll_number.as_deref(), Some("CS21B042"));
                assert!(input.company.is_none());
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let request = parse(json!({
            "action": "delete_account",
            "confirm": true
        }));
        assert!(matches!(request, Ok(ApiRequest::DeleteAccount)));
    }
}
