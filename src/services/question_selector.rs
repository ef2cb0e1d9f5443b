use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
    repositories::{QuestionRepository, QuizQuestionRepository},
};

/// How the next question of a quiz is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Random question the quiz has not answered yet.
    Fresh,
    /// Same question sequence as a reference quiz, position by position.
    Replay { reference_quiz_id: String },
}

impl SelectionMode {
    /// An absent or nil invited quiz id means fresh play.
    pub fn from_invited(invited_quiz_id: Option<Uuid>) -> Self {
        match invited_quiz_id {
            Some(id) if !id.is_nil() => SelectionMode::Replay {
                reference_quiz_id: id.to_string(),
            },
            _ => SelectionMode::Fresh,
        }
    }
}

pub struct QuestionSelector {
    questions: Arc<dyn QuestionRepository>,
    history: Arc<dyn QuizQuestionRepository>,
}

impl QuestionSelector {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        history: Arc<dyn QuizQuestionRepository>,
    ) -> Self {
        Self { questions, history }
    }

    /// Returns `None` once the selected mode has nothing left to serve.
    pub async fn select(&self, quiz_id: &str, mode: &SelectionMode) -> AppResult<Option<Question>> {
        match mode {
            SelectionMode::Fresh => self.unseen_question(quiz_id).await,
            SelectionMode::Replay { reference_quiz_id } => {
                self.replayed_question(quiz_id, reference_quiz_id).await
            }
        }
    }

    async fn unseen_question(&self, quiz_id: &str) -> AppResult<Option<Question>> {
        let answered = self.history.question_ids_for_quiz(quiz_id).await?;
        log::debug!(
            "Selecting fresh question for quiz {} ({} already answered)",
            quiz_id,
            answered.len()
        );
        self.questions.sample_excluding(&answered).await
    }

    async fn replayed_question(
        &self,
        quiz_id: &str,
        reference_quiz_id: &str,
    ) -> AppResult<Option<Question>> {
        let next_order = self.history.count_for_quiz(quiz_id).await? as i64 + 1;
        log::debug!(
            "Replaying order {} of quiz {} for quiz {}",
            next_order,
            reference_quiz_id,
            quiz_id
        );

        let Some(record) = self
            .history
            .find_by_order(reference_quiz_id, next_order)
            .await?
        else {
            return Ok(None);
        };

        let question = self
            .questions
            .find_by_id(&record.question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Question with id '{}' not found",
                    record.question_id
                ))
            })?;

        Ok(Some(question))
    }
}
