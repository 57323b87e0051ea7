use crate::modules::judging::core::ranking::{RankedProject, round_one_decimal};
use serde::{Deserialize, Serialize};

pub const UNNAMED_TEAM: &str = "Unnamed Team";
pub const UNTITLED_PROJECT: &str = "Untitled Project";

/// One leaderboard line as shown on the detached display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    pub id: String,
    pub team_name: String,
    pub project_name: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

impl From<&RankedProject> for TeamScore {
    fn from(row: &RankedProject) -> Self {
        Self {
            id: row.project.id.clone(),
            team_name: row
                .project
                .team_name
                .clone()
                .unwrap_or_else(|| UNNAMED_TEAM.to_string()),
            project_name: row
                .project
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED_PROJECT.to_string()),
            score: round_one_decimal(row.aggregate.overall_average),
            rank: Some(row.rank),
        }
    }
}

pub fn to_team_scores(ranked: &[RankedProject]) -> Vec<TeamScore> {
    ranked.iter().map(TeamScore::from).collect()
}

#[cfg(test)]
mod team_score_tests {
    use super::*;
    use crate::modules::judging::core::project::Project;
    use crate::modules::judging::core::ranking::rank_projects;
    use crate::tests::fixtures::projects::project;
    use crate::tests::fixtures::ratings::rating_with_sum;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_map_ranked_rows_with_rounded_scores() {
        let mut titled = project("P1", "Code Warriors");
        titled.title = Some("AI Fitness Coach".into());
        let ranked = rank_projects(
            &[titled],
            &[
                rating_with_sum("P1", "J1", 95.04),
                rating_with_sum("P1", "J2", 95.0),
            ],
        );
        assert_eq!(
            to_team_scores(&ranked),
            vec![TeamScore {
                id: "P1".into(),
                team_name: "Code Warriors".into(),
                project_name: "AI Fitness Coach".into(),
                score: 95.0,
                rank: Some(1),
            }]
        );
    }

    #[rstest]
    fn it_should_fall_back_for_missing_names() {
        let anonymous = Project {
            id: "P1".into(),
            ..Project::default()
        };
        let ranked = rank_projects(&[anonymous], &[]);
        let score = TeamScore::from(&ranked[0]);
        assert_eq!(score.team_name, UNNAMED_TEAM);
        assert_eq!(score.project_name, UNTITLED_PROJECT);
        assert_eq!(score.score, 0.0);
    }

    #[rstest]
    fn it_should_use_the_display_field_names() {
        let value = serde_json::to_value(TeamScore {
            id: "1".into(),
            team_name: "Byte Busters".into(),
            project_name: "Smart Irrigation System".into(),
            score: 92.0,
            rank: None,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "teamName": "Byte Busters",
                "projectName": "Smart Irrigation System",
                "score": 92.0,
            })
        );
    }
}
