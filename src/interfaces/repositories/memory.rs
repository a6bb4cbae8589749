use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    entities::document::Document,
    errors::AppError,
    repositories::collection::DocumentCollection,
};

/// Process-local collection keeping documents in insertion order.
///
/// Stands in for Postgres in tests and local experiments; nothing survives
/// a restart.
pub struct MemoryCollection<T> {
    docs: RwLock<Vec<T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        MemoryCollection { docs: RwLock::new(Vec::new()) }
    }
}

impl<T: Document> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}

#[async_trait]
impl<T: Document> DocumentCollection<T> for MemoryCollection<T> {
    async fn insert_one(&self, doc: &T::New, created_at: DateTime<Utc>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        self.docs.write().push(T::from_new(id, doc.clone(), created_at));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        Ok(self.docs.read().clone())
    }

    async fn update_one(&self, id: &Uuid, patch: &T::Patch, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut docs = self.docs.write();
        let Some(doc) = docs.iter_mut().find(|d| d.id() == *id) else {
            return Ok(0);
        };

        if doc.apply_patch(patch) {
            doc.set_created_at(now);
            Ok(1)
        } else {
            Ok(0)
        }
    }

    async fn delete_one(&self, id: &Uuid) -> Result<u64, AppError> {
        let mut docs = self.docs.write();
        let before = docs.len();
        docs.retain(|d| d.id() != *id);
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
