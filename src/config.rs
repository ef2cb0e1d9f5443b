use secrecy::SecretString;
use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub questions_seed_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "globetrotter-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            questions_seed_path: env::var("QUESTIONS_SEED_PATH")
                .unwrap_or_else(|_| "data/questions.json".to_string()),
        }
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.mongo_db_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "MONGO_DB_NAME must not be empty".to_string(),
            ));
        }

        if self.web_server_port == 0 {
            return Err(AppError::ValidationError(
                "WEB_SERVER_PORT must be a non-zero port".to_string(),
            ));
        }

        if self.cors_allowed_origin.trim().is_empty() {
            return Err(AppError::ValidationError(
                "CORS_ALLOWED_ORIGIN must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "globetrotter-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            questions_seed_path: "data/questions.json".to_string(),
        }
    }
}
