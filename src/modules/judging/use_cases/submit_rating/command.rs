use crate::modules::judging::core::rating::Scores;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitRating {
    pub project_id: String,
    pub judge_id: String,
    pub impact: f64,
    pub innovation: f64,
    pub feasibility: f64,
    pub presentation: f64,
}

impl SubmitRating {
    pub fn scores(&self) -> Scores {
        Scores::new(
            self.impact,
            self.innovation,
            self.feasibility,
            self.presentation,
        )
    }
}
