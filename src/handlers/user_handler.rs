use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, ids::parse_id,
    models::dto::request::RegisterUserRequest,
};

#[post("/user/register")]
async fn register_user(
    state: web::Data<AppState>,
    request: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register_user(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/user/{id}")]
async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id, "user id")?;
    let user = state.user_service.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.health_check().await;

    let response = serde_json::json!({
        "status": if db_health.is_ok() { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    match db_health {
        Ok(()) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Readiness check failed: {}", err);
            HttpResponse::ServiceUnavailable().json(response)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user)
        .service(get_user)
        .service(health_check)
        .service(health_check_ready);
}
