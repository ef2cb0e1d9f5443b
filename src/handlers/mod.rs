pub mod graphql_handler;
pub mod quiz_handler;
pub mod user_handler;

use actix_web::web;

/// Registers every REST and GraphQL route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(user_handler::configure)
        .configure(quiz_handler::configure)
        .configure(graphql_handler::configure);
}
