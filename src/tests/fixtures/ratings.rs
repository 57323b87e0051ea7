use crate::modules::judging::core::rating::{Rating, Scores};

/// A rating whose criteria add up to `score_sum`.
pub fn rating_with_sum(project_id: &str, judge_id: &str, score_sum: f64) -> Rating {
    Rating::new(project_id, judge_id, Scores::new(score_sum, 0.0, 0.0, 0.0))
}
