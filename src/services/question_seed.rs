use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
    repositories::QuestionRepository,
};

/// One entry of the question seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub clues: Vec<String>,
    #[serde(default)]
    pub fun_fact: Vec<String>,
    #[serde(default)]
    pub trivia: Vec<String>,
    pub options: Vec<String>,
    pub correct_answer: i32,
}

impl SeedQuestion {
    fn into_question(self) -> AppResult<Question> {
        if self.city.trim().is_empty() {
            return Err(AppError::ValidationError(
                "seed question has an empty city".to_string(),
            ));
        }

        let in_range = usize::try_from(self.correct_answer)
            .map(|index| index < self.options.len())
            .unwrap_or(false);
        if !in_range {
            return Err(AppError::ValidationError(format!(
                "seed question '{}' has correct_answer {} outside of {} options",
                self.city,
                self.correct_answer,
                self.options.len()
            )));
        }

        let now = Utc::now();
        Ok(Question {
            id: Uuid::new_v4().to_string(),
            city: self.city,
            country: self.country,
            clues: self.clues,
            fun_fact: self.fun_fact,
            trivia: self.trivia,
            options: self.options,
            correct_answer: self.correct_answer,
            created_at: Some(now),
            updated_at: Some(now),
        })
    }
}

pub fn parse_seed(json: &str) -> AppResult<Vec<Question>> {
    let entries: Vec<SeedQuestion> = serde_json::from_str(json)?;
    entries.into_iter().map(SeedQuestion::into_question).collect()
}

/// Loads the seed file into an empty question collection. Returns how many
/// questions were inserted.
pub async fn seed_questions_if_empty(
    repository: &dyn QuestionRepository,
    path: impl AsRef<Path>,
) -> AppResult<u64> {
    let path = path.as_ref();

    let existing = repository.count().await?;
    if existing > 0 {
        log::info!("Question bank already holds {} questions, skipping seed", existing);
        return Ok(0);
    }

    if !path.exists() {
        log::warn!("Question seed file {} not found, question bank is empty", path.display());
        return Ok(0);
    }

    let json = tokio::fs::read_to_string(path).await?;
    let questions = parse_seed(&json)?;
    let inserted = repository.insert_many(questions).await?;

    log::info!("Seeded {} questions from {}", inserted, path.display());
    Ok(inserted)
}
