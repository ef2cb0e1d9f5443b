use async_graphql::InputObject;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 50, message = "invalid user name"))]
    pub name: String,
}

impl RegisterUserRequest {
    /// Copy of the request with surrounding whitespace removed from the name.
    pub fn trimmed(&self) -> Self {
        RegisterUserRequest {
            name: self.name.trim().to_string(),
        }
    }
}

/// Body of `POST /quiz/create`: the owner's user name.
#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 50, message = "invalid user name"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct QuizAnswerInput {
    pub quiz_id: Uuid,
    pub question_id: Uuid,
    #[validate(length(max = 200))]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionQuery {
    #[serde(rename = "invitedQuizId")]
    pub invited_quiz_id: Option<String>,
}
