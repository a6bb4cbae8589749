use std::borrow::Cow;

use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Column/value pairs a payload writes to storage, in declaration order.
pub type FieldValues = Vec<(&'static str, String)>;

/// Payloads that can be flattened into the columns they write.
pub trait Fields {
    fn field_values(&self) -> FieldValues;

    fn is_empty(&self) -> bool {
        self.field_values().is_empty()
    }
}

/// A document living in its own collection.
///
/// `New` is the create payload, `Patch` the partial update payload. The
/// identifier and `created_at` never come from the client.
pub trait Document: Serialize + Clone + Send + Sync + Unpin + 'static {
    /// Collection (table) name
    const COLLECTION: &'static str;
    /// Name used in response messages
    const LABEL: &'static str;

    type New: DeserializeOwned + Fields + Clone + Send + Sync;
    type Patch: DeserializeOwned + Fields + Validate + Send + Sync;

    fn id(&self) -> Uuid;

    fn from_new(id: Uuid, new: Self::New, created_at: DateTime<Utc>) -> Self;

    /// Merges the supplied fields. Returns `false` when every supplied value
    /// equals the stored one.
    fn apply_patch(&mut self, patch: &Self::Patch) -> bool;

    fn set_created_at(&mut self, at: DateTime<Utc>);
}

/// Sets `target` to the supplied value, reporting whether it changed.
pub fn merge_field<T: PartialEq + Clone>(target: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if v != target => {
            *target = v.clone();
            true
        }
        _ => false,
    }
}

/// Rejects partial updates that carry no field at all.
pub fn ensure_not_empty<P: Fields>(patch: &P) -> Result<(), ValidationError> {
    if patch.is_empty() {
        let mut err = ValidationError::new("empty_update");
        err.message = Some(Cow::Borrowed("At least one field must be provided"));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Display, Error, PartialEq)]
#[display("unknown category: {_0}")]
pub struct UnknownCategory(#[error(not(source))] pub String);
