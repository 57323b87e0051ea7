// Organizer dashboard figures derived from projects and ratings.

use crate::modules::judging::core::aggregate::group_by_project;
use crate::modules::judging::core::project::Project;
use crate::modules::judging::core::rating::Rating;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const UNKNOWN_PROJECT: &str = "Unknown Project";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEvaluation {
    pub project_id: String,
    pub project_title: String,
    pub total_score: f64,
    pub evaluation_count: usize,
    pub evaluated_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_projects: usize,
    pub active_judges: usize,
    pub evaluations_complete: usize,
    pub evaluations: Vec<ProjectEvaluation>,
}

pub fn judging_dashboard(projects: &[Project], ratings: &[Rating]) -> Dashboard {
    let titles: HashMap<&str, &str> = projects
        .iter()
        .filter_map(|project| project.display_title().map(|title| (project.id.as_str(), title)))
        .collect();

    let active_judges = ratings
        .iter()
        .map(|rating| rating.judge_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let evaluations: Vec<ProjectEvaluation> = group_by_project(ratings)
        .into_iter()
        .map(|aggregate| {
            let evaluated_by = aggregate
                .judge_totals
                .iter()
                .map(|judge| judge.judge_id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            ProjectEvaluation {
                project_title: titles
                    .get(aggregate.project_id.as_str())
                    .copied()
                    .unwrap_or(UNKNOWN_PROJECT)
                    .to_string(),
                total_score: aggregate.total_score(),
                evaluation_count: aggregate.evaluation_count,
                evaluated_by,
                project_id: aggregate.project_id,
            }
        })
        .collect();

    Dashboard {
        total_projects: projects.len(),
        active_judges,
        evaluations_complete: evaluations.len(),
        evaluations,
    }
}
