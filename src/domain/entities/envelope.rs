use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ───── API Response Models ──────────────────────────────────────────
// Every endpoint answers with `success` and `message`; create adds `id`,
// list adds `data`.

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: Uuid) -> Self {
        CreatedResponse { success: true, message: message.into(), id }
    }
}

impl<T> ListResponse<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>) -> Self {
        ListResponse { success: true, message: message.into(), data }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { success: true, message: message.into() }
    }
}
