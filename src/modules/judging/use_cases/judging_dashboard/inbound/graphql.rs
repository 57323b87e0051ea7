use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::judging::core::dashboard::{Dashboard, ProjectEvaluation};
use crate::modules::judging::use_cases::view_leaderboard::inbound::graphql::saturating_i32;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectEvaluation {
    pub project_id: String,
    pub project_title: String,
    pub total_score: f64,
    pub evaluation_count: i32,
    pub evaluated_by: String,
}

impl From<ProjectEvaluation> for GqlProjectEvaluation {
    fn from(v: ProjectEvaluation) -> Self {
        Self {
            project_id: v.project_id,
            project_title: v.project_title,
            total_score: v.total_score,
            evaluation_count: saturating_i32(v.evaluation_count),
            evaluated_by: v.evaluated_by,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDashboard {
    pub total_projects: i32,
    pub active_judges: i32,
    pub evaluations_complete: i32,
    pub evaluations: Vec<GqlProjectEvaluation>,
}

impl From<Dashboard> for GqlDashboard {
    fn from(v: Dashboard) -> Self {
        Self {
            total_projects: saturating_i32(v.total_projects),
            active_judges: saturating_i32(v.active_judges),
            evaluations_complete: saturating_i32(v.evaluations_complete),
            evaluations: v.evaluations.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    async fn dashboard(&self, context: &Context<'_>) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let dashboard = state
            .judging_dashboard_handler
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(dashboard.into())
    }
}
