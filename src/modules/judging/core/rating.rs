// A judge's four-criterion score for one project, and the key that makes it unique.

use crate::modules::judging::core::record::{
    RecordError, optional_f64, optional_str, required_f64, required_str,
};
use crate::shared::infrastructure::document_store::{Document, Record};
use serde_json::Value;
use thiserror::Error;

pub const RATINGS_COLLECTION: &str = "ratings";

/// Joins project id and judge id into a rating document id.
pub const RATING_KEY_SEPARATOR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub impact: f64,
    pub innovation: f64,
    pub feasibility: f64,
    pub presentation: f64,
}

impl Scores {
    pub fn new(impact: f64, innovation: f64, feasibility: f64, presentation: f64) -> Self {
        Self {
            impact,
            innovation,
            feasibility,
            presentation,
        }
    }

    pub fn sum(&self) -> f64 {
        self.impact + self.innovation + self.feasibility + self.presentation
    }

    pub fn is_finite(&self) -> bool {
        [
            self.impact,
            self.innovation,
            self.feasibility,
            self.presentation,
        ]
        .iter()
        .all(|score| score.is_finite())
    }

    /// The criteria and their freshly computed `scoreSum`, as written on every upsert.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("impact".into(), Value::from(self.impact));
        record.insert("innovation".into(), Value::from(self.innovation));
        record.insert("feasibility".into(), Value::from(self.feasibility));
        record.insert("presentation".into(), Value::from(self.presentation));
        record.insert("scoreSum".into(), Value::from(self.sum()));
        record
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub project_id: String,
    pub judge_id: String,
    pub scores: Scores,
    pub score_sum: f64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Rating {
    pub fn new(project_id: impl Into<String>, judge_id: impl Into<String>, scores: Scores) -> Self {
        Self {
            project_id: project_id.into(),
            judge_id: judge_id.into(),
            score_sum: scores.sum(),
            scores,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn to_record(&self) -> Record {
        let mut record = self.scores.to_record();
        record.insert("projectId".into(), Value::from(self.project_id.clone()));
        record.insert("judgeId".into(), Value::from(self.judge_id.clone()));
        record
    }

    /// A stored `scoreSum` wins over the criteria so aggregates match what was written.
    pub fn from_document(document: &Document) -> Result<Self, RecordError> {
        let id = document.id.as_str();
        let fields = &document.fields;
        let scores = Scores {
            impact: required_f64(id, fields, "impact")?,
            innovation: required_f64(id, fields, "innovation")?,
            feasibility: required_f64(id, fields, "feasibility")?,
            presentation: required_f64(id, fields, "presentation")?,
        };
        Ok(Self {
            project_id: required_str(id, fields, "projectId")?,
            judge_id: judge_id(id, fields)?,
            score_sum: optional_f64(id, fields, "scoreSum")?.unwrap_or_else(|| scores.sum()),
            scores,
            created_at: Some(document.created_at),
            updated_at: Some(document.updated_at),
        })
    }
}

/// Older ratings carry the judge under `judgeEmail`.
fn judge_id(id: &str, fields: &Record) -> Result<String, RecordError> {
    match optional_str(id, fields, "judgeId")? {
        Some(judge_id) if !judge_id.is_empty() => Ok(judge_id),
        _ => required_str(id, fields, "judgeEmail").map_err(|_| RecordError::MissingField {
            id: id.to_string(),
            field: "judgeId",
        }),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingKeyError {
    #[error("project id must not be empty")]
    EmptyProjectId,

    #[error("judge id must not be empty")]
    EmptyJudgeId,

    #[error("project id must not contain `_`")]
    SeparatorInProjectId,

    #[error("{0} must not contain `/`")]
    IllegalCharacter(&'static str),
}

/// Document id of the single rating a judge may hold for a project.
///
/// The project id never contains the separator, so distinct project and judge pairs
/// always get distinct keys, even when the judge id (an e-mail) contains one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RatingKey(String);

impl RatingKey {
    pub fn new(project_id: &str, judge_id: &str) -> Result<Self, RatingKeyError> {
        if project_id.is_empty() {
            return Err(RatingKeyError::EmptyProjectId);
        }
        if judge_id.is_empty() {
            return Err(RatingKeyError::EmptyJudgeId);
        }
        if project_id.contains(RATING_KEY_SEPARATOR) {
            return Err(RatingKeyError::SeparatorInProjectId);
        }
        if project_id.contains('/') {
            return Err(RatingKeyError::IllegalCharacter("project id"));
        }
        if judge_id.contains('/') {
            return Err(RatingKeyError::IllegalCharacter("judge id"));
        }
        Ok(Self(format!("{project_id}{RATING_KEY_SEPARATOR}{judge_id}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
