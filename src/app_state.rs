use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuestionRepository, MongoQuizQuestionRepository, MongoQuizRepository,
        MongoUserRepository,
    },
    services::{question_seed::seed_questions_if_empty, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    /// Absent when the services run on non-Mongo repositories.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;
        seed_questions_if_empty(question_repository.as_ref(), &config.questions_seed_path).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let quiz_question_repository = Arc::new(MongoQuizQuestionRepository::new(&db));
        quiz_question_repository.ensure_indexes().await?;

        let user_service = Arc::new(UserService::new(user_repository.clone()));
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            question_repository,
            quiz_question_repository,
            user_repository,
        ));

        Ok(Self {
            user_service,
            quiz_service,
            db: Some(db),
        })
    }

    pub fn from_services(user_service: Arc<UserService>, quiz_service: Arc<QuizService>) -> Self {
        Self {
            user_service,
            quiz_service,
            db: None,
        }
    }

    pub async fn health_check(&self) -> AppResult<()> {
        match &self.db {
            Some(db) => db.health_check().await,
            None => Ok(()),
        }
    }
}
