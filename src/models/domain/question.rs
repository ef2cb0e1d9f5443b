use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A city-guessing puzzle. Seeded once, never edited by the game.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Question {
    pub id: String,
    pub city: String,
    pub country: String,
    pub clues: Vec<String>,
    pub fun_fact: Vec<String>,
    pub trivia: Vec<String>,
    pub options: Vec<String>,
    pub correct_answer: i32, // index into `options`, not used for grading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Grading is literal, case-sensitive equality with the city name.
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        self.city == answer
    }
}
