use async_graphql::{Context, Object, ResultExt};

use crate::{
    app_state::AppState,
    models::{
        domain::{Quiz, User},
        dto::{
            request::{CreateQuizRequest, QuizAnswerInput, RegisterUserRequest},
            response::QuizAnswerResponse,
        },
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register_user(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<User> {
        let state = ctx.data::<AppState>()?;
        state
            .user_service
            .register_user(RegisterUserRequest { name })
            .await
            .extend()
    }

    async fn create_quiz(&self, ctx: &Context<'_>, username: String) -> async_graphql::Result<Quiz> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .create_quiz(CreateQuizRequest { name: username })
            .await
            .extend()
    }

    async fn submit_answer(
        &self,
        ctx: &Context<'_>,
        input: QuizAnswerInput,
    ) -> async_graphql::Result<QuizAnswerResponse> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.submit_answer(input).await.extend()
    }
}
