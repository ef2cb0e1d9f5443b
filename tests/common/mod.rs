#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use globetrotter_server::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz, QuizQuestion, User},
    repositories::{QuestionRepository, QuizQuestionRepository, QuizRepository, UserRepository},
    services::{QuizService, UserService},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.name == user.name) {
            return Err(AppError::AlreadyExists(format!(
                "User with name '{}' already exists",
                user.name
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.name == name).cloned())
    }
}

/// Questions kept in insertion order. `sample_excluding` returns the first
/// eligible one so tests are deterministic.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn sample_excluding(&self, excluded_ids: &[String]) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .find(|q| !excluded_ids.contains(&q.id))
            .cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.questions.read().await.len() as u64)
    }

    async fn insert_many(&self, new_questions: Vec<Question>) -> AppResult<u64> {
        let mut questions = self.questions.write().await;
        let inserted = new_questions.len() as u64;
        questions.extend(new_questions);
        Ok(inserted)
    }
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| q.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn increment_score(&self, id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let quiz = quizzes
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;
        quiz.score += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryQuizQuestionRepository {
    records: RwLock<Vec<QuizQuestion>>,
}

#[async_trait]
impl QuizQuestionRepository for InMemoryQuizQuestionRepository {
    async fn record_answer(&self, record: QuizQuestion) -> AppResult<QuizQuestion> {
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|r| r.quiz_id == record.quiz_id && r.order_number == record.order_number)
        {
            return Err(AppError::AlreadyExists(format!(
                "Quiz '{}' already has an answer at position {}",
                record.quiz_id, record.order_number
            )));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn remove_answer(&self, id: &str) -> AppResult<()> {
        self.records.write().await.retain(|r| r.id != id);
        Ok(())
    }

    async fn last_order_number(&self, quiz_id: &str) -> AppResult<i64> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .map(|r| r.order_number)
            .max()
            .unwrap_or(0))
    }

    async fn count_for_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.quiz_id == quiz_id).count() as u64)
    }

    async fn question_ids_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<String>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .map(|r| r.question_id.clone())
            .collect())
    }

    async fn find_by_order(
        &self,
        quiz_id: &str,
        order_number: i64,
    ) -> AppResult<Option<QuizQuestion>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.quiz_id == quiz_id && r.order_number == order_number)
            .cloned())
    }

    async fn list_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let records = self.records.read().await;
        let mut items: Vec<_> = records
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .cloned()
            .collect();
        items.sort_by_key(|r| r.order_number);
        Ok(items)
    }
}

/// History store whose next `record_answer` fails once `fail_next_insert`
/// is armed, as a dropped write would.
#[derive(Default)]
pub struct FlakyQuizQuestionRepository {
    inner: InMemoryQuizQuestionRepository,
    fail_next_insert: AtomicBool,
}

impl FlakyQuizQuestionRepository {
    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl QuizQuestionRepository for FlakyQuizQuestionRepository {
    async fn record_answer(&self, record: QuizQuestion) -> AppResult<QuizQuestion> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(AppError::DatabaseError("write concern timed out".to_string()));
        }
        self.inner.record_answer(record).await
    }

    async fn remove_answer(&self, id: &str) -> AppResult<()> {
        self.inner.remove_answer(id).await
    }

    async fn last_order_number(&self, quiz_id: &str) -> AppResult<i64> {
        self.inner.last_order_number(quiz_id).await
    }

    async fn count_for_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        self.inner.count_for_quiz(quiz_id).await
    }

    async fn question_ids_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<String>> {
        self.inner.question_ids_for_quiz(quiz_id).await
    }

    async fn find_by_order(
        &self,
        quiz_id: &str,
        order_number: i64,
    ) -> AppResult<Option<QuizQuestion>> {
        self.inner.find_by_order(quiz_id, order_number).await
    }

    async fn list_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        self.inner.list_for_quiz(quiz_id).await
    }
}

pub fn question(id: &str, city: &str, country: &str) -> Question {
    Question {
        id: id.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        clues: vec![format!("Somewhere in {}", country)],
        fun_fact: vec![],
        trivia: vec![],
        options: vec![city.to_string(), "Atlantis".to_string()],
        correct_answer: 0,
        created_at: None,
        updated_at: None,
    }
}

/// Paris, Rome and Tokyo, with UUID ids.
pub fn sample_questions() -> Vec<Question> {
    vec![
        question(
            "5f0c2b1e-1111-4c3a-9a51-000000000001",
            "Paris",
            "France",
        ),
        question("5f0c2b1e-1111-4c3a-9a51-000000000002", "Rome", "Italy"),
        question("5f0c2b1e-1111-4c3a-9a51-000000000003", "Tokyo", "Japan"),
    ]
}

/// Services wired to fresh in-memory repositories holding `questions`.
pub async fn in_memory_state(questions: Vec<Question>) -> AppState {
    in_memory_state_with_history(
        questions,
        Arc::new(InMemoryQuizQuestionRepository::default()),
    )
    .await
}

/// Like [`in_memory_state`], with a caller-supplied answer history store.
pub async fn in_memory_state_with_history(
    questions: Vec<Question>,
    history: Arc<dyn QuizQuestionRepository>,
) -> AppState {
    let users = Arc::new(InMemoryUserRepository::default());
    let question_repository = Arc::new(InMemoryQuestionRepository::default());
    question_repository
        .insert_many(questions)
        .await
        .expect("seeding in-memory questions should succeed");

    let quiz_service = QuizService::new(
        Arc::new(InMemoryQuizRepository::default()),
        question_repository,
        history,
        users.clone(),
    );

    AppState::from_services(
        Arc::new(UserService::new(users)),
        Arc::new(quiz_service),
    )
}
