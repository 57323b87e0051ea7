use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::judging::use_cases::submit_project::command::SubmitProject;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitProjectMutation;

#[Object]
impl SubmitProjectMutation {
    async fn submit_project(
        &self,
        context: &Context<'_>,
        team_name: String,
        title: Option<String>,
        description: Option<String>,
        demo_url: Option<String>,
        repo_url: Option<String>,
        members: Option<Vec<String>>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitProject {
            team_name,
            title,
            description,
            demo_url,
            repo_url,
            members,
        };

        let project_id = state
            .submit_project_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(project_id))
    }
}
