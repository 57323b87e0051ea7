use crate::modules::judging::core::record::{
    RecordError, optional_str, optional_str_list,
};
use crate::shared::infrastructure::document_store::Document;
use serde::Serialize;

pub const PROJECTS_COLLECTION: &str = "projects";

/// A submitted hackathon project. Read-only once created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub team_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub members: Option<Vec<String>>,
    pub created_at: Option<i64>,
}

impl Project {
    pub fn from_document(document: &Document) -> Result<Self, RecordError> {
        let id = document.id.as_str();
        let fields = &document.fields;
        Ok(Self {
            id: document.id.clone(),
            team_name: optional_str(id, fields, "teamName")?,
            title: optional_str(id, fields, "title")?,
            description: optional_str(id, fields, "description")?,
            demo_url: optional_str(id, fields, "demoUrl")?,
            repo_url: optional_str(id, fields, "repoUrl")?,
            members: optional_str_list(id, fields, "members")?,
            created_at: Some(document.created_at),
        })
    }

    /// Title for listings: the project title, else the team name.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.team_name.as_deref())
    }
}
