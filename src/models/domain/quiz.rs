use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Quiz {
    pub id: String,
    pub user_id: String,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Where a quiz stands with respect to the next question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    InProgress,
    Complete,
}

impl Quiz {
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        Quiz {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            score: 0,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
