use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, QuizQuestion},
        dto::{
            request::{CreateQuizRequest, QuizAnswerInput},
            response::{
                AnsweredQuestion, NextQuestionResponse, QuizAnswerResponse, QuizScore, QuizSummary,
            },
        },
    },
    repositories::{QuestionRepository, QuizQuestionRepository, QuizRepository, UserRepository},
    services::question_selector::{QuestionSelector, SelectionMode},
};

const MAX_RECORD_ATTEMPTS: usize = 16;

/// Drives a quiz session: picks questions, grades answers, keeps the score.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    history: Arc<dyn QuizQuestionRepository>,
    users: Arc<dyn UserRepository>,
    selector: QuestionSelector,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        history: Arc<dyn QuizQuestionRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let selector = QuestionSelector::new(Arc::clone(&questions), Arc::clone(&history));
        Self {
            quizzes,
            questions,
            history,
            users,
            selector,
        }
    }

    pub async fn get_quiz(&self, id: &Uuid) -> AppResult<Quiz> {
        self.find_quiz(&id.to_string()).await
    }

    async fn find_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    async fn get_question(&self, id: &Uuid) -> AppResult<Question> {
        self.questions
            .find_by_id(&id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let user = self
            .users
            .find_by_name(&request.name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User with name '{}' not found", request.name))
            })?;

        let quiz = self.quizzes.create(Quiz::new(&user.id)).await?;
        log::info!("Created quiz {} for user '{}'", quiz.id, user.name);

        Ok(quiz)
    }

    /// Next question for `quiz_id`. With a non-nil `invited_quiz_id` the
    /// quiz follows the invited quiz's question order.
    pub async fn next_question(
        &self,
        quiz_id: &Uuid,
        invited_quiz_id: Option<Uuid>,
    ) -> AppResult<NextQuestionResponse> {
        let quiz = self.get_quiz(quiz_id).await?;

        let mode = SelectionMode::from_invited(invited_quiz_id);
        if let SelectionMode::Replay { reference_quiz_id } = &mode {
            self.find_quiz(reference_quiz_id).await?;
        }

        match self.selector.select(&quiz.id, &mode).await? {
            Some(question) => Ok(NextQuestionResponse::in_progress(question)),
            None => {
                log::info!("Quiz {} has no questions left ({:?})", quiz.id, mode);
                Ok(NextQuestionResponse::complete())
            }
        }
    }

    pub async fn submit_answer(&self, input: QuizAnswerInput) -> AppResult<QuizAnswerResponse> {
        input.validate()?;

        let quiz = self.get_quiz(&input.quiz_id).await?;
        let question = self.get_question(&input.question_id).await?;

        let is_correct = question.is_correct_answer(&input.answer);
        let record = self
            .append_answer(&quiz.id, &question.id, is_correct, &input.answer)
            .await?;
        let order_number = record.order_number;

        if is_correct {
            if let Err(err) = self.quizzes.increment_score(&quiz.id).await {
                log::error!(
                    "Score update for quiz {} failed, removing answer #{}: {}",
                    quiz.id,
                    order_number,
                    err
                );
                if let Err(cleanup) = self.history.remove_answer(&record.id).await {
                    log::error!("Could not remove answer {}: {}", record.id, cleanup);
                }
                return Err(err);
            }
        }

        let score = self.get_quiz_score(&input.quiz_id).await?;
        log::info!(
            "Quiz {} answer #{} for question {}: correct={}, score={}",
            quiz.id,
            order_number,
            question.id,
            is_correct,
            score.score
        );

        Ok(QuizAnswerResponse {
            is_correct,
            score: score.score,
            total_questions: score.total_questions,
        })
    }

    /// Writes the answer at the quiz's next free position. A position taken
    /// by a concurrent submission is retried with a fresh read.
    async fn append_answer(
        &self,
        quiz_id: &str,
        question_id: &str,
        is_correct: bool,
        answer: &str,
    ) -> AppResult<QuizQuestion> {
        for attempt in 1..=MAX_RECORD_ATTEMPTS {
            let order_number = self.history.last_order_number(quiz_id).await? + 1;
            let record = QuizQuestion::new(quiz_id, question_id, is_correct, answer, order_number);

            match self.history.record_answer(record).await {
                Err(AppError::AlreadyExists(msg)) => {
                    log::debug!("Attempt {} for quiz {} lost the race: {}", attempt, quiz_id, msg);
                }
                other => return other,
            }
        }

        Err(AppError::InternalError(format!(
            "Could not record answer for quiz '{}' after {} attempts",
            quiz_id, MAX_RECORD_ATTEMPTS
        )))
    }

    pub async fn get_quiz_score(&self, quiz_id: &Uuid) -> AppResult<QuizScore> {
        let quiz = self.get_quiz(quiz_id).await?;
        let total_questions = self.history.count_for_quiz(&quiz.id).await? as i64;

        Ok(QuizScore {
            score: quiz.score,
            total_questions,
        })
    }

    pub async fn list_quizzes_for_user(&self, username: &str) -> AppResult<Vec<QuizSummary>> {
        let user = self
            .users
            .find_by_name(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with name '{}' not found", username)))?;

        let quizzes = self.quizzes.list_by_user(&user.id).await?;

        let mut summaries = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            let total_questions = self.history.count_for_quiz(&quiz.id).await? as i64;
            summaries.push(QuizSummary::from_quiz(quiz, total_questions));
        }

        Ok(summaries)
    }

    /// Answered questions of a quiz in the order they were served.
    pub async fn get_quiz_history(&self, quiz_id: &Uuid) -> AppResult<Vec<AnsweredQuestion>> {
        let quiz = self.get_quiz(quiz_id).await?;
        let records = self.history.list_for_quiz(&quiz.id).await?;

        let mut answered = Vec::with_capacity(records.len());
        for record in records {
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
            answered.push(AnsweredQuestion::new(record, question));
        }

        Ok(answered)
    }
}
