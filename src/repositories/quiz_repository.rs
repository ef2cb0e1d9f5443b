use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{Database, QUIZZES_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    /// Quizzes owned by `user_id`, newest first.
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Quiz>>;
    /// Atomic `+1` on the quiz score.
    async fn increment_score(&self, id: &str) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(QUIZZES_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }

    fn quiz_not_found(id: &str) -> AppError {
        AppError::NotFound(format!("Quiz with id '{}' not found", id))
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn increment_score(&self, id: &str) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! {
                    "$inc": { "score": 1_i64 },
                    "$set": { "updated_at": Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true) },
                },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(Self::quiz_not_found(id));
        }

        Ok(())
    }
}
