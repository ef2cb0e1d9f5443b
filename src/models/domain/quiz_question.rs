use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answered question inside a quiz. Written once per submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizQuestion {
    pub id: String,
    pub quiz_id: String,
    pub question_id: String,
    pub is_correct: bool,
    pub user_answer: String,
    pub order_number: i64, // 1-based, unique per quiz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuizQuestion {
    pub fn new(
        quiz_id: &str,
        question_id: &str,
        is_correct: bool,
        user_answer: &str,
        order_number: i64,
    ) -> Self {
        let now = Utc::now();
        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            question_id: question_id.to_string(),
            is_correct,
            user_answer: user_answer.to_string(),
            order_number,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
