// In memory implementation of the DocumentStore port.
//
// Purpose
// - Support use case tests and local development without the hosted database.
//
// Responsibilities
// - Keep documents per collection in insertion order.
// - Stamp created_at on first write and updated_at on every write.

use crate::shared::infrastructure::document_store::{
    Document, DocumentStore, DocumentStoreError, Record,
};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    clock: Clock,
    is_offline: bool,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    pub fn with_clock(clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            clock: Box::new(clock),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), DocumentStoreError> {
        if self.is_offline {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, collection: &str, record: Record) -> Result<String, DocumentStoreError> {
        self.ensure_online()?;
        let id = Uuid::now_v7().to_string();
        let now = (self.clock)();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                fields: record,
                created_at: now,
                updated_at: now,
            });
        Ok(id)
    }

    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        self.ensure_online()?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        record: Record,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;
        let now = (self.clock)();
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection.to_string()).or_default();
        match documents.iter_mut().find(|d| d.id == id) {
            Some(document) => {
                document.fields = record;
                document.updated_at = now;
            }
            None => documents.push(Document {
                id: id.to_string(),
                fields: record,
                created_at: now,
                updated_at: now,
            }),
        }
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Record,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;
        let now = (self.clock)();
        let mut guard = self.collections.write().await;
        let document = guard
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| DocumentStoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        document.fields.extend(partial);
        document.updated_at = now;
        Ok(())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        self.ensure_online()?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}
