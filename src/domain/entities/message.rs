use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::document::{ensure_not_empty, merge_field, Document, FieldValues, Fields};

/// A contact message left through the portfolio site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_message_patch"))]
pub struct MessagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fn validate_message_patch(patch: &MessagePatch) -> Result<(), ValidationError> {
    ensure_not_empty(patch)
}

impl Fields for NewMessage {
    fn field_values(&self) -> FieldValues {
        vec![("text", self.text.clone())]
    }
}

impl Fields for MessagePatch {
    fn field_values(&self) -> FieldValues {
        self.text.iter().map(|t| ("text", t.clone())).collect()
    }
}

impl Document for Message {
    const COLLECTION: &'static str = "messages";
    const LABEL: &'static str = "Message";

    type New = NewMessage;
    type Patch = MessagePatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_new(id: Uuid, new: NewMessage, created_at: DateTime<Utc>) -> Self {
        Message { id, text: new.text, created_at }
    }

    fn apply_patch(&mut self, patch: &MessagePatch) -> bool {
        merge_field(&mut self.text, &patch.text)
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}
