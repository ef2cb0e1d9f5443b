use crate::models::domain::{Question, Quiz, QuizQuestion, User};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A question whose correct answer is `city`.
    pub fn test_question(id: &str, city: &str) -> Question {
        Question {
            id: id.to_string(),
            city: city.to_string(),
            country: "Testland".to_string(),
            clues: vec![format!("A clue about {}", city)],
            fun_fact: vec![format!("A fun fact about {}", city)],
            trivia: vec![],
            options: vec![city.to_string(), "Elsewhere".to_string()],
            correct_answer: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn test_quiz(id: &str, user_id: &str) -> Quiz {
        Quiz {
            id: id.to_string(),
            ..Quiz::new(user_id)
        }
    }

    pub fn test_user(name: &str) -> User {
        User::new(name)
    }

    pub fn test_answer(quiz_id: &str, question_id: &str, order_number: i64) -> QuizQuestion {
        QuizQuestion::new(quiz_id, question_id, true, "Paris", order_number)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_question_fixture_answers_with_city() {
        let question = test_question("q-1", "Lima");
        assert_eq!(question.id, "q-1");
        assert!(question.is_correct_answer("Lima"));
        assert_eq!(question.options[question.correct_answer as usize], "Lima");
    }

    #[test]
    fn test_quiz_fixture_keeps_given_id() {
        let quiz = test_quiz("quiz-1", "user-1");
        assert_eq!(quiz.id, "quiz-1");
        assert_eq!(quiz.user_id, "user-1");
        assert_eq!(quiz.score, 0);
    }

    #[test]
    fn test_answer_fixture_carries_order() {
        let answer = test_answer("quiz-1", "q-1", 3);
        assert_eq!(answer.order_number, 3);
        assert!(answer.is_correct);
    }
}
