//! Q&A mutation actions

use serde::Deserialize;
use tracing::info;

use crate::common::validate::{optional_text, require_text};
use crate::common::{
    authorize, require_actor, Actor, AnswerId, ApiError, ApiResult, QuestionId, ResourceAction,
};
use crate::domains::qa::models::{Answer, CreateQuestion, Question, UpdateQuestion};
use crate::kernel::ServerDeps;

#[derive(Debug, Deserialize)]
pub struct CreateQuestionInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuestionInput {
    pub question_id: QuestionId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Ask a question. Visible immediately; there is no moderation step here.
pub async fn create_question(
    actor: Option<&Actor>,
    input: CreateQuestionInput,
    deps: &ServerDeps,
) -> ApiResult<Question> {
    let title = require_text("Title", &input.title, 200)?;
    let content = require_text("Content", &input.content, 10_000)?;

    authorize(actor, ResourceAction::CreateQuestion)?;
    let actor = require_actor(actor)?;

    info!(author_id = %actor.id, %title, "Creating question");

    let question = Question::create(
        CreateQuestion {
            author_id: actor.id,
            title,
            content,
        },
        &deps.db_pool,
    )
    .await
    .map_err(ApiError::from_db)?;

    Ok(question)
}

/// Edit a question (owner or admin).
pub async fn update_question(
    actor: Option<&Actor>,
    input: UpdateQuestionInput,
    deps: &ServerDeps,
) -> ApiResult<()> {
    let title = optional_text("Title", input.title, 200)?;
    let content = optional_text("Content", input.content, 10_000)?;

    let question = Question::find_by_id(input.question_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Question not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::EditQuestion {
            author_id: question.author_id,
        },
    )?;

    Question::update_content(question.id, UpdateQuestion { title, content }, &deps.db_pool)
        .await?;

    Ok(())
}

/// Delete a question and, through the schema, its answers (owner or
/// admin).
pub async fn delete_question(
    actor: Option<&Actor>,
    question_id: QuestionId,
    deps: &ServerDeps,
) -> ApiResult<()> {
    let question = Question::find_by_id(question_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Question not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::DeleteQuestion {
            author_id: question.author_id,
        },
    )?;

    info!(question_id = %question.id, "Deleting question");

    Question::delete(question.id, &deps.db_pool).await?;

    Ok(())
}

/// Answer a question. The verified flag is decided here, once, from the
/// author's current role.
pub async fn create_answer(
    actor: Option<&Actor>,
    question_id: QuestionId,
    content: String,
    deps: &ServerDeps,
) -> ApiResult<Answer> {
    let content = require_text("Content", &content, 10_000)?;

    let question = Question::find_by_id(question_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Question not found.".to_string()))?;

    authorize(actor, ResourceAction::CreateAnswer)?;
    let actor = require_actor(actor)?;

    let is_verified = Answer::verified_for(actor.role);

    info!(question_id = %question.id, author_id = %actor.id, is_verified, "Creating answer");

    let answer = Answer::create(question.id, actor.id, &content, is_verified, &deps.db_pool)
        .await
        .map_err(ApiError::from_db)?;

    Ok(answer)
}

/// Delete an answer (owner or admin).
pub async fn delete_answer(
    actor: Option<&Actor>,
    answer_id: AnswerId,
    deps: &ServerDeps,
) -> ApiResult<()> {
    let answer = Answer::find_by_id(answer_id, &deps.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Answer not found.".to_string()))?;

    authorize(
        actor,
        ResourceAction::DeleteAnswer {
            author_id: answer.author_id,
        },
    )?;

    Answer::delete(answer.id, &deps.db_pool).await?;

    Ok(())
}
