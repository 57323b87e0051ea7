use crate::modules::judging::core::project::PROJECTS_COLLECTION;
use crate::modules::judging::use_cases::errors::ApplicationError;
use crate::modules::judging::use_cases::submit_project::command::SubmitProject;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;
use tracing::info;

pub struct SubmitProjectHandler<TDocumentStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
{
    store: Arc<TDocumentStore>,
}

impl<TDocumentStore> SubmitProjectHandler<TDocumentStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TDocumentStore>) -> Self {
        Self { store }
    }

    /// Stores the project under a generated id and returns it.
    pub async fn handle(&self, command: SubmitProject) -> Result<String, ApplicationError> {
        if command.team_name.trim().is_empty() {
            return Err(ApplicationError::Domain(
                "team name must not be blank".to_string(),
            ));
        }
        let project_id = self
            .store
            .create(PROJECTS_COLLECTION, command.to_record())
            .await?;
        info!(project_id = project_id.as_str(), team_name = command.team_name.trim(), "project submitted");
        Ok(project_id)
    }
}
