use crate::modules::judging::adapters::outbound::judging_records::{load_projects, load_ratings};
use crate::modules::judging::core::dashboard::{Dashboard, judging_dashboard};
use crate::modules::judging::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;
use tracing::error;

pub struct JudgingDashboardHandler<TDocumentStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
{
    store: Arc<TDocumentStore>,
}

impl<TDocumentStore> JudgingDashboardHandler<TDocumentStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TDocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Dashboard, ApplicationError> {
        let projects = load_projects(self.store.as_ref())
            .await
            .inspect_err(|e| error!(error = %e, "failed to list projects"))?;
        let ratings = load_ratings(self.store.as_ref())
            .await
            .inspect_err(|e| error!(error = %e, "failed to list ratings"))?;
        Ok(judging_dashboard(&projects, &ratings))
    }
}
