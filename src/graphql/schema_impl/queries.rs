use async_graphql::{Context, Object, ResultExt, ID};

use crate::{
    app_state::AppState,
    ids::{parse_id, parse_optional_id},
    models::{
        domain::User,
        dto::response::{AnsweredQuestion, NextQuestionResponse, QuizScore, QuizSummary},
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<User> {
        let state = ctx.data::<AppState>()?;
        let id = parse_id(&id, "user id").extend()?;
        state.user_service.get_user(&id).await.extend()
    }

    async fn user_by_name(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<User> {
        let state = ctx.data::<AppState>()?;
        state.user_service.get_user_by_name(&name).await.extend()
    }

    async fn next_question(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
        invited_quiz_id: Option<ID>,
    ) -> async_graphql::Result<NextQuestionResponse> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_id(&quiz_id, "quizId").extend()?;
        let invited_quiz_id =
            parse_optional_id(invited_quiz_id.as_deref().map(String::as_str), "invitedQuizId")
                .extend()?;

        state
            .quiz_service
            .next_question(&quiz_id, invited_quiz_id)
            .await
            .extend()
    }

    async fn quiz_score(&self, ctx: &Context<'_>, quiz_id: ID) -> async_graphql::Result<QuizScore> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_id(&quiz_id, "quizId").extend()?;
        state.quiz_service.get_quiz_score(&quiz_id).await.extend()
    }

    async fn quizzes(
        &self,
        ctx: &Context<'_>,
        username: String,
    ) -> async_graphql::Result<Vec<QuizSummary>> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .list_quizzes_for_user(&username)
            .await
            .extend()
    }

    async fn quiz_history(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
    ) -> async_graphql::Result<Vec<AnsweredQuestion>> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_id(&quiz_id, "quizId").extend()?;
        state.quiz_service.get_quiz_history(&quiz_id).await.extend()
    }
}
