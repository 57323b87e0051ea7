// File backed implementation of the SnapshotStore port.
//
// Responsibilities
// - Keep one `<key>.json` file per key inside a directory, created on first write.
// - Replace files atomically so a reader never sees a half written value.

use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileSnapshotStore {
    directory: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SnapshotStoreError> {
        let is_plain_name = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !is_plain_name {
            return Err(SnapshotStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotStoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.directory)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, SnapshotStoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
