use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, QUIZ_QUESTIONS_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

/// Append-only answer history, one record per submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuestionRepository: Send + Sync {
    /// Fails with `AlreadyExists` when the quiz already has a record at the
    /// same order number.
    async fn record_answer(&self, record: QuizQuestion) -> AppResult<QuizQuestion>;
    async fn remove_answer(&self, id: &str) -> AppResult<()>;
    /// Highest order number recorded for the quiz, 0 when it has none.
    async fn last_order_number(&self, quiz_id: &str) -> AppResult<i64>;
    async fn count_for_quiz(&self, quiz_id: &str) -> AppResult<u64>;
    async fn question_ids_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<String>>;
    async fn find_by_order(&self, quiz_id: &str, order_number: i64)
        -> AppResult<Option<QuizQuestion>>;
    /// All records of a quiz in ascending order number.
    async fn list_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>>;
}

pub struct MongoQuizQuestionRepository {
    collection: Collection<QuizQuestion>,
}

impl MongoQuizQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(QUIZ_QUESTIONS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_questions collection");

        let order_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "order_number": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("quiz_order_unique".to_string())
                    .build(),
            )
            .build();

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let question_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("quiz_question".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(order_index).await?;
        self.collection.create_index(id_index).await?;
        self.collection.create_index(question_index).await?;

        log::info!("Successfully created indexes for quiz_questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuizQuestionRepository for MongoQuizQuestionRepository {
    async fn record_answer(&self, record: QuizQuestion) -> AppResult<QuizQuestion> {
        self.collection.insert_one(&record).await.map_err(|err| {
            match AppError::from(err) {
                AppError::AlreadyExists(_) => AppError::AlreadyExists(format!(
                    "Quiz '{}' already has an answer at order {}",
                    record.quiz_id, record.order_number
                )),
                other => other,
            }
        })?;
        Ok(record)
    }

    async fn remove_answer(&self, id: &str) -> AppResult<()> {
        self.collection.delete_one(doc! { "id": id }).await?;
        Ok(())
    }

    async fn last_order_number(&self, quiz_id: &str) -> AppResult<i64> {
        let latest = self
            .collection
            .find_one(doc! { "quiz_id": quiz_id })
            .sort(doc! { "order_number": -1 })
            .await?;
        Ok(latest.map_or(0, |record| record.order_number))
    }

    async fn count_for_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "quiz_id": quiz_id })
            .await?;
        Ok(count)
    }

    async fn question_ids_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<String>> {
        let records: Vec<QuizQuestion> = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .await?
            .try_collect()
            .await?;
        Ok(records.into_iter().map(|r| r.question_id).collect())
    }

    async fn find_by_order(
        &self,
        quiz_id: &str,
        order_number: i64,
    ) -> AppResult<Option<QuizQuestion>> {
        let record = self
            .collection
            .find_one(doc! { "quiz_id": quiz_id, "order_number": order_number })
            .await?;
        Ok(record)
    }

    async fn list_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let records = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .sort(doc! { "order_number": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }
}
