use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Parses a client-supplied identifier, naming the field in the error.
pub fn parse_id(raw: &str, field: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::ValidationError(format!("invalid {}: '{}'", field, raw)))
}

/// Like [`parse_id`], but an absent or empty value yields `None`.
pub fn parse_optional_id(raw: Option<&str>, field: &str) -> AppResult<Option<Uuid>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(value, field).map(Some),
    }
}
