use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemorySnapshotStore {
    values: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SnapshotStoreError> {
        if self.is_offline {
            return Err(SnapshotStoreError::Backend("Snapshot store offline".into()));
        }
        Ok(())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotStoreError> {
        self.ensure_online()?;
        self.values
            .write()
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, SnapshotStoreError> {
        self.ensure_online()?;
        Ok(self
            .values
            .read()
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?
            .get(key)
            .cloned())
    }
}
