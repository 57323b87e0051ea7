use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::snapshot_store::in_memory::InMemorySnapshotStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(InMemorySnapshotStore::new()),
    )
}

pub fn make_offline_document_store_state() -> AppState {
    let mut store = InMemoryDocumentStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), Arc::new(InMemorySnapshotStore::new()))
}
