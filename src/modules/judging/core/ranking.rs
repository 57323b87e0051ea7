// Rank projects by the overall average of their judge totals.
//
// Responsibilities
// - Include every project, rated or not.
// - Sort on the unrounded average with a stable sort so ties keep input order.
// - Assign 1-based positions as ranks; tied projects get consecutive ranks.

use crate::modules::judging::core::aggregate::{ProjectAggregate, group_by_project};
use crate::modules::judging::core::project::Project;
use crate::modules::judging::core::rating::Rating;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProject {
    pub rank: usize,
    pub project: Project,
    pub aggregate: ProjectAggregate,
}

/// Ratings for projects missing from `projects` are ignored.
pub fn rank_projects(projects: &[Project], ratings: &[Rating]) -> Vec<RankedProject> {
    let aggregates: HashMap<String, ProjectAggregate> = group_by_project(ratings)
        .into_iter()
        .map(|aggregate| (aggregate.project_id.clone(), aggregate))
        .collect();

    let mut rows: Vec<(Project, ProjectAggregate)> = projects
        .iter()
        .map(|project| {
            let aggregate = aggregates
                .get(&project.id)
                .cloned()
                .unwrap_or_else(|| ProjectAggregate::empty(&project.id));
            (project.clone(), aggregate)
        })
        .collect();

    rows.sort_by(|(_, a), (_, b)| {
        b.overall_average
            .partial_cmp(&a.overall_average)
            .unwrap_or(Ordering::Equal)
    });

    rows.into_iter()
        .enumerate()
        .map(|(index, (project, aggregate))| RankedProject {
            rank: index + 1,
            project,
            aggregate,
        })
        .collect()
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One-decimal rendering of an average, e.g. `85.04999` -> `"85.0"`.
pub fn display_score(value: f64) -> String {
    format!("{:.1}", round_one_decimal(value))
}
