// Group raw ratings into per-project aggregates.
//
// Responsibilities
// - Keep first-seen order for projects and, within a project, for judges.
// - Sum every record of a judge into that judge's total. Duplicate records for the
//   same judge are summed, not merged; the upsert key makes them unexpected.
// - Average the judge totals, treating an empty project as 0 instead of dividing by zero.

use crate::modules::judging::core::rating::Rating;
use crate::modules::judging::core::ranking::display_score;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeTotal {
    pub judge_id: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAggregate {
    pub project_id: String,
    pub judge_totals: Vec<JudgeTotal>,
    pub overall_average: f64,
    pub evaluation_count: usize,
}

impl ProjectAggregate {
    pub fn empty(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            judge_totals: Vec::new(),
            overall_average: 0.0,
            evaluation_count: 0,
        }
    }

    fn from_ratings(project_id: &str, ratings: &[&Rating]) -> Self {
        let mut judge_totals: Vec<JudgeTotal> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for rating in ratings {
            let slot = *slots.entry(rating.judge_id.as_str()).or_insert_with(|| {
                judge_totals.push(JudgeTotal {
                    judge_id: rating.judge_id.clone(),
                    total: 0.0,
                });
                judge_totals.len() - 1
            });
            judge_totals[slot].total += rating.score_sum;
        }

        let sum: f64 = judge_totals.iter().map(|judge| judge.total).sum();
        let overall_average = sum / judge_totals.len().max(1) as f64;

        Self {
            project_id: project_id.to_string(),
            judge_totals,
            overall_average,
            evaluation_count: ratings.len(),
        }
    }

    pub fn total_score(&self) -> f64 {
        self.judge_totals.iter().map(|judge| judge.total).sum()
    }

    pub fn display_score(&self) -> String {
        display_score(self.overall_average)
    }
}

pub fn group_by_project(ratings: &[Rating]) -> Vec<ProjectAggregate> {
    let mut groups: Vec<(&str, Vec<&Rating>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for rating in ratings {
        let slot = *slots.entry(rating.project_id.as_str()).or_insert_with(|| {
            groups.push((rating.project_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(rating);
    }

    groups
        .into_iter()
        .map(|(project_id, ratings)| ProjectAggregate::from_ratings(project_id, &ratings))
        .collect()
}
