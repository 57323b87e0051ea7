// Port for the hosted document database.
//
// Purpose
// - Describe the create, read, update and list capabilities the judging use cases need.
//
// Boundaries
// - Records are flat JSON maps. Typed conversion happens in the core, not here.
// - Timestamps are assigned by the store on every write, never by the caller.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Record,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores a new document under a generated id and returns that id.
    async fn create(&self, collection: &str, record: Record) -> Result<String, DocumentStoreError>;

    async fn get(&self, collection: &str, id: &str)
    -> Result<Option<Document>, DocumentStoreError>;

    /// Replaces the fields of `id`, creating the document when it does not exist yet.
    async fn set(&self, collection: &str, id: &str, record: Record)
    -> Result<(), DocumentStoreError>;

    /// Merges `partial` into an existing document. Fails with `NotFound` otherwise.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Record,
    ) -> Result<(), DocumentStoreError>;

    /// Lists every document of `collection` in insertion order.
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError>;
}

pub mod in_memory;
