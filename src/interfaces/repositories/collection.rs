use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{entities::document::Document, errors::AppError};

/// Storage primitives for one collection of documents.
#[async_trait]
pub trait DocumentCollection<T: Document>: Send + Sync {
    /// Inserts a new document and returns the identifier the store assigned.
    async fn insert_one(&self, doc: &T::New, created_at: DateTime<Utc>) -> Result<Uuid, AppError>;

    async fn find_all(&self) -> Result<Vec<T>, AppError>;

    /// Merges `patch` into the matching document and refreshes its
    /// `created_at`. Returns the number of documents modified.
    async fn update_one(&self, id: &Uuid, patch: &T::Patch, now: DateTime<Utc>) -> Result<u64, AppError>;

    /// Returns the number of documents removed.
    async fn delete_one(&self, id: &Uuid) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub type SharedCollection<T> = Arc<dyn DocumentCollection<T>>;
