//! Q&A query actions

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::common::{
    authorize, utils, Actor, ApiError, ApiResult, PageArgs, QuestionId, ResourceAction,
};
use crate::domains::qa::models::{Answer, AnswerWithAuthor, Question};
use crate::kernel::ServerDeps;

/// Listing payload: the row plus a relative timestamp.
#[derive(Debug, Serialize)]
pub struct QuestionPayload {
    #[serde(flatten)]
    pub question: Question,
    pub created_ago: String,
}

impl From<Question> for QuestionPayload {
    fn from(question: Question) -> Self {
        let created_ago = utils::time_ago(question.created_at, Utc::now());
        Self {
            question,
            created_ago,
        }
    }
}

/// Detail payload: question plus its answers, verified answers first.
#[derive(Debug, Serialize)]
pub struct QuestionDetailPayload {
    pub question: QuestionPayload,
    pub answers: Vec<AnswerWithAuthor>,
}

/// Public question index, newest first.
pub async fn list_questions(
    actor: Option<&Actor>,
    page: PageArgs,
    deps: &ServerDeps,
) -> ApiResult<Vec<QuestionPayload>> {
    let args = page.validate()?;
    authorize(actor, ResourceAction::ListQuestions)?;

    let questions = Question::list(&args, &deps.db_pool).await?;
    Ok(questions.into_iter().map(Into::into).collect())
}

/// One question with its answers. Public; every fetch counts a view and
/// the returned row reflects the post-increment value.
pub async fn get_question_detail(
    actor: Option<&Actor>,
    question_id: QuestionId,
    deps: &ServerDeps,
) -> ApiResult<QuestionDetailPayload> {
    authorize(actor, ResourceAction::ViewQuestion)?;

    // Bump before the read; a failed bump never blocks the fetch.
    if let Err(error) = Question::bump_views(question_id, &deps.db_pool).await {
        warn!(question_id = %question_id, ?error, "View count bump failed");
    }

    let question = Question::find_by_id(question_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Question not found.".to_string()))?;

    let answers = Answer::list_for_question(question.id, &deps.db_pool).await?;

    Ok(QuestionDetailPayload {
        question: question.into(),
        answers,
    })
}
