use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Question, Quiz, QuizQuestion, QuizStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct QuizAnswerResponse {
    pub is_correct: bool,
    pub score: i64,
    pub total_questions: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct QuizScore {
    pub score: i64,
    pub total_questions: i64,
}

/// A quiz as listed in a user's history, with its answered count derived
/// at listing time.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizSummary {
    pub id: String,
    pub user_id: String,
    pub score: i64,
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuizSummary {
    pub fn from_quiz(quiz: Quiz, total_questions: i64) -> Self {
        QuizSummary {
            id: quiz.id,
            user_id: quiz.user_id,
            score: quiz.score,
            total_questions,
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct NextQuestionResponse {
    pub status: QuizStatus,
    pub question: Option<Question>,
}

impl NextQuestionResponse {
    pub fn in_progress(question: Question) -> Self {
        NextQuestionResponse {
            status: QuizStatus::InProgress,
            question: Some(question),
        }
    }

    pub fn complete() -> Self {
        NextQuestionResponse {
            status: QuizStatus::Complete,
            question: None,
        }
    }
}

/// A history record joined with the question it refers to.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AnsweredQuestion {
    pub order_number: i64,
    pub is_correct: bool,
    pub user_answer: String,
    pub question: Question,
}

impl AnsweredQuestion {
    pub fn new(record: QuizQuestion, question: Question) -> Self {
        AnsweredQuestion {
            order_number: record.order_number,
            is_correct: record.is_correct,
            user_answer: record.user_answer,
            question,
        }
    }
}
