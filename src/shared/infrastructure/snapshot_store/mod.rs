// Port for a local, synchronous key-value snapshot store.
//
// Purpose
// - Keep the last rendered value of a read model so a detached display can show it offline.
//
// Boundaries
// - Values are opaque strings. Serialization belongs to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid snapshot key: {0}")]
    InvalidKey(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub trait SnapshotStore: Send + Sync {
    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotStoreError>;
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotStoreError>;
}

pub mod file;
pub mod in_memory;
