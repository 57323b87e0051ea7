use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::judging::use_cases::judging_dashboard::inbound::graphql::DashboardQuery;
use crate::modules::judging::use_cases::submit_project::inbound::graphql::SubmitProjectMutation;
use crate::modules::judging::use_cases::submit_rating::inbound::graphql::SubmitRatingMutation;
use crate::modules::judging::use_cases::view_leaderboard::inbound::graphql::LeaderboardQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(LeaderboardQuery, DashboardQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitRatingMutation, SubmitProjectMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
