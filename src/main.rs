use actix_web::{middleware::Logger, web, App, HttpServer};

use globetrotter_server::{
    app_state::AppState,
    config::Config,
    graphql::create_schema,
    handlers::configure_routes,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }

    let app_state = match AppState::new(&config).await {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialize application state: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let schema = create_schema(app_state.clone());

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting HTTP server on http://{}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        config.web_server_host,
        config.web_server_port
    );

    let allowed_origin = config.cors_allowed_origin.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(cors(&allowed_origin))
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T request_id=%{x-request-id}o"#,
            ))
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
