use crate::shared::infrastructure::document_store::Record;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmitProject {
    pub team_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

impl SubmitProject {
    /// Every field is written, unset ones as null, so stored projects share one shape.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("teamName".into(), Value::from(self.team_name.trim()));
        record.insert("title".into(), Value::from(self.title.clone()));
        record.insert("description".into(), Value::from(self.description.clone()));
        record.insert("demoUrl".into(), Value::from(self.demo_url.clone()));
        record.insert("repoUrl".into(), Value::from(self.repo_url.clone()));
        record.insert("members".into(), Value::from(self.members.clone()));
        record
    }
}
