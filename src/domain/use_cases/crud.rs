use chrono::Utc;
use validator::Validate;

use crate::{
    entities::{
        document::Document,
        envelope::{CreatedResponse, ListResponse, MessageResponse},
    },
    errors::AppError,
    repositories::collection::SharedCollection,
    utils::valid_uuid::valid_uuid,
};

/// Only inserts may surface a storage refusal to the client.
fn storage_failure(err: AppError) -> AppError {
    match err {
        AppError::Rejected(reason) => AppError::InternalError(reason),
        other => other,
    }
}

/// The create/list/update/delete pattern shared by every resource.
pub struct CrudHandler<T: Document> {
    pub collection: SharedCollection<T>,
}

impl<T: Document> CrudHandler<T> {
    pub fn new(collection: SharedCollection<T>) -> Self {
        CrudHandler { collection }
    }

    /// Stamps the payload with the current time and stores it
    pub async fn create(&self, doc: T::New) -> Result<CreatedResponse, AppError> {
        let id = self.collection
            .insert_one(&doc, Utc::now())
            .await
            .map_err(|e| match e {
                AppError::Rejected(reason) => {
                    tracing::warn!(collection = T::COLLECTION, %reason, "insert rejected");
                    AppError::Rejected(format!("Failed to create {}", T::LABEL.to_lowercase()))
                }
                _ => e,
            })?;

        tracing::info!(collection = T::COLLECTION, %id, "document created");

        Ok(CreatedResponse::new(format!("{} created successfully", T::LABEL), id))
    }

    /// Retrieves every document in the collection
    pub async fn list(&self) -> Result<ListResponse<T>, AppError> {
        let docs = self.collection.find_all().await.map_err(storage_failure)?;

        Ok(ListResponse::new(format!("{}s retrieved successfully", T::LABEL), docs))
    }

    /// Merges the supplied fields into an existing document
    pub async fn update(&self, id: &str, patch: &T::Patch) -> Result<MessageResponse, AppError> {
        patch.validate()?;

        let valid_id = valid_uuid(id)?;

        let modified = self.collection
            .update_one(&valid_id, patch, Utc::now())
            .await
            .map_err(storage_failure)?;

        if modified == 0 {
            return Err(AppError::NotFound(format!("{} not found or no changes", T::LABEL)));
        }

        tracing::info!(collection = T::COLLECTION, id = %valid_id, "document updated");

        Ok(MessageResponse::new(format!("{} updated successfully", T::LABEL)))
    }

    /// Deletes a document by its ID
    pub async fn delete(&self, id: &str) -> Result<MessageResponse, AppError> {
        let valid_id = valid_uuid(id)?;

        let deleted = self.collection.delete_one(&valid_id).await.map_err(storage_failure)?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!("{} not found", T::LABEL)));
        }

        tracing::info!(collection = T::COLLECTION, id = %valid_id, "document deleted");

        Ok(MessageResponse::new(format!("{} deleted successfully", T::LABEL)))
    }
}
