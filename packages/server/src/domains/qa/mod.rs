//! Q&A domain - questions and answers
//!
//! Questions are visible immediately (no moderation step). An answer by a
//! mentor is verified at creation; a question with at least one verified
//! answer reports `has_verified_answer`, derived on read and never stored.

pub mod actions;
pub mod models;

pub use models::{Answer, AnswerWithAuthor, CreateQuestion, Question, UpdateQuestion};
