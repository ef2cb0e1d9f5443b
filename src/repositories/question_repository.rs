use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{Database, QUESTIONS_COLLECTION},
    errors::AppResult,
    models::domain::Question,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    /// Uniformly random question whose id is not in `excluded_ids`.
    async fn sample_excluding(&self, excluded_ids: &[String]) -> AppResult<Option<Question>>;
    async fn count(&self) -> AppResult<u64>;
    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(QUESTIONS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn sample_excluding(&self, excluded_ids: &[String]) -> AppResult<Option<Question>> {
        let excluded: Vec<String> = excluded_ids.to_vec();
        let pipeline = vec![
            doc! { "$match": { "id": { "$nin": excluded } } },
            doc! { "$sample": { "size": 1 } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let sampled: Option<Document> = cursor.try_next().await?;

        match sampled {
            Some(document) => Ok(Some(from_document(document)?)),
            None => Ok(None),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        let total = self.collection.count_documents(doc! {}).await?;
        Ok(total)
    }

    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<u64> {
        if questions.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(&questions).await?;
        Ok(result.inserted_ids.len() as u64)
    }
}
