pub mod question;
pub mod quiz;
pub mod quiz_question;
pub mod user;
pub use question::Question;
pub use quiz::{Quiz, QuizStatus};
pub use quiz_question::QuizQuestion;
pub use user::User;
