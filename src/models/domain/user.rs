use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct User {
    pub id: String,
    pub name: String, // unique, trimmed on registration
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            score: 0,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
