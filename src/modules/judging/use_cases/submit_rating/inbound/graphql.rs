use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::judging::use_cases::submit_rating::command::SubmitRating;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitRatingMutation;

#[Object]
impl SubmitRatingMutation {
    async fn submit_rating(
        &self,
        context: &Context<'_>,
        project_id: String,
        judge_id: String,
        impact: f64,
        innovation: f64,
        feasibility: f64,
        presentation: f64,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitRating {
            project_id,
            judge_id,
            impact,
            innovation,
            feasibility,
            presentation,
        };

        state
            .submit_rating_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(true)
    }
}
