use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    ids::{parse_id, parse_optional_id},
    middleware::get_request_id,
    models::dto::request::{CreateQuizRequest, QuestionQuery, QuizAnswerInput},
};

#[get("/quiz/list/{username}")]
async fn list_quizzes(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state
        .quiz_service
        .list_quizzes_for_user(&username.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quiz/{quiz_id}/question")]
async fn get_quiz_question(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    query: web::Query<QuestionQuery>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = parse_id(&quiz_id, "quiz_id")?;
    let invited_quiz_id = parse_optional_id(query.invited_quiz_id.as_deref(), "invitedQuizId")?;

    let response = state
        .quiz_service
        .next_question(&quiz_id, invited_quiz_id)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/quiz/answer")]
async fn submit_answer(
    req: HttpRequest,
    state: web::Data<AppState>,
    input: web::Json<QuizAnswerInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    let quiz_id = input.quiz_id;

    let response = state.quiz_service.submit_answer(input).await.map_err(|err| {
        log::warn!(
            "[{}] answer for quiz {} rejected: {}",
            get_request_id(&req).unwrap_or_default(),
            quiz_id,
            err
        );
        err
    })?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/quiz/create")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/quiz/{quiz_id}/score")]
async fn get_quiz_score(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = parse_id(&quiz_id, "quiz_id")?;
    let score = state.quiz_service.get_quiz_score(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(score))
}

#[get("/quiz/{quiz_id}/history")]
async fn get_quiz_history(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = parse_id(&quiz_id, "quiz_id")?;
    let history = state.quiz_service.get_quiz_history(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(history))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_quizzes)
        .service(create_quiz)
        .service(submit_answer)
        .service(get_quiz_question)
        .service(get_quiz_score)
        .service(get_quiz_history);
}
