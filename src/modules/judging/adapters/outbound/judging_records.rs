// Typed reads of the projects and ratings collections.
//
// Responsibilities
// - List a collection and convert each document at the store boundary.
// - Skip documents that do not convert, with a warning, so one bad record cannot
//   hide the rest of the board. Listing failures still propagate.

use crate::modules::judging::core::project::{PROJECTS_COLLECTION, Project};
use crate::modules::judging::core::rating::{RATINGS_COLLECTION, Rating};
use crate::modules::judging::core::record::RecordError;
use crate::shared::infrastructure::document_store::{Document, DocumentStore, DocumentStoreError};
use tracing::warn;

pub async fn load_projects<TDocumentStore>(
    store: &TDocumentStore,
) -> Result<Vec<Project>, DocumentStoreError>
where
    TDocumentStore: DocumentStore + ?Sized,
{
    let documents = store.list_all(PROJECTS_COLLECTION).await?;
    Ok(convert_all(PROJECTS_COLLECTION, &documents, Project::from_document))
}

pub async fn load_ratings<TDocumentStore>(
    store: &TDocumentStore,
) -> Result<Vec<Rating>, DocumentStoreError>
where
    TDocumentStore: DocumentStore + ?Sized,
{
    let documents = store.list_all(RATINGS_COLLECTION).await?;
    Ok(convert_all(RATINGS_COLLECTION, &documents, Rating::from_document))
}

fn convert_all<T>(
    collection: &str,
    documents: &[Document],
    convert: impl Fn(&Document) -> Result<T, RecordError>,
) -> Vec<T> {
    documents
        .iter()
        .filter_map(|document| {
            convert(document)
                .inspect_err(|e| warn!(collection, error = %e, "skipping malformed record"))
                .ok()
        })
        .collect()
}
