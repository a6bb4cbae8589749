use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path identifier into the storage's UUID format
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::BadRequest("Invalid id".to_string()))
}
