use crate::modules::judging::core::aggregate::JudgeTotal;
use crate::modules::judging::core::ranking::RankedProject;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeTotalView {
    pub judge_id: String,
    pub total: f64,
}

impl From<JudgeTotal> for JudgeTotalView {
    fn from(judge: JudgeTotal) -> Self {
        Self {
            judge_id: judge.judge_id,
            total: judge.total,
        }
    }
}

/// One ranked leaderboard line for organizers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub project_id: String,
    pub team_name: Option<String>,
    pub title: Option<String>,
    pub overall_average: f64,
    pub display_score: String,
    pub evaluation_count: usize,
    pub judge_totals: Vec<JudgeTotalView>,
}

impl From<RankedProject> for LeaderboardRow {
    fn from(row: RankedProject) -> Self {
        Self {
            rank: row.rank,
            project_id: row.project.id,
            team_name: row.project.team_name,
            title: row.project.title,
            display_score: row.aggregate.display_score(),
            overall_average: row.aggregate.overall_average,
            evaluation_count: row.aggregate.evaluation_count,
            judge_totals: row
                .aggregate
                .judge_totals
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
