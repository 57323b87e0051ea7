use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::judging::adapters::outbound::leaderboard_snapshot::LeaderboardSnapshot;
use crate::modules::judging::core::team_score::TeamScore;
use crate::modules::judging::use_cases::view_leaderboard::projection::{
    JudgeTotalView, LeaderboardRow,
};
use crate::shell::state::AppState;

/// GraphQL `Int` is 32-bit; larger counts clamp instead of wrapping.
pub fn saturating_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlJudgeTotal {
    pub judge_id: String,
    pub total: f64,
}

impl From<JudgeTotalView> for GqlJudgeTotal {
    fn from(v: JudgeTotalView) -> Self {
        Self {
            judge_id: v.judge_id,
            total: v.total,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLeaderboardRow {
    pub rank: i32,
    pub project_id: String,
    pub team_name: Option<String>,
    pub title: Option<String>,
    pub overall_average: f64,
    pub display_score: String,
    pub evaluation_count: i32,
    pub judge_totals: Vec<GqlJudgeTotal>,
}

impl From<LeaderboardRow> for GqlLeaderboardRow {
    fn from(v: LeaderboardRow) -> Self {
        Self {
            rank: saturating_i32(v.rank),
            project_id: v.project_id,
            team_name: v.team_name,
            title: v.title,
            overall_average: v.overall_average,
            display_score: v.display_score,
            evaluation_count: saturating_i32(v.evaluation_count),
            judge_totals: v.judge_totals.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTeamScore {
    pub id: String,
    pub team_name: String,
    pub project_name: String,
    pub score: f64,
    pub rank: Option<i32>,
}

impl From<TeamScore> for GqlTeamScore {
    fn from(v: TeamScore) -> Self {
        Self {
            id: v.id,
            team_name: v.team_name,
            project_name: v.project_name,
            score: v.score,
            rank: v.rank.map(saturating_i32),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLeaderboardSnapshot {
    /// Epoch milliseconds of the last save.
    pub updated_at: Option<i64>,
    pub entries: Vec<GqlTeamScore>,
}

impl From<LeaderboardSnapshot> for GqlLeaderboardSnapshot {
    fn from(v: LeaderboardSnapshot) -> Self {
        Self {
            updated_at: v.updated_at,
            entries: v.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct LeaderboardQuery;

#[Object]
impl LeaderboardQuery {
    async fn leaderboard(
        &self,
        context: &Context<'_>,
        refresh_snapshot: Option<bool>,
    ) -> GqlResult<Vec<GqlLeaderboardRow>> {
        let state = context.data_unchecked::<AppState>();
        let ranked = state
            .view_leaderboard_handler
            .handle(refresh_snapshot.unwrap_or(false))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(ranked
            .into_iter()
            .map(|row| GqlLeaderboardRow::from(LeaderboardRow::from(row)))
            .collect())
    }

    async fn leaderboard_snapshot(&self, context: &Context<'_>) -> GqlLeaderboardSnapshot {
        let state = context.data_unchecked::<AppState>();
        state.snapshots.load_latest().unwrap_or_default().into()
    }
}
