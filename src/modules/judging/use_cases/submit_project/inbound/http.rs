use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::judging::use_cases::errors::ApplicationError;
use crate::modules::judging::use_cases::submit_project::command::SubmitProject;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmitProjectResponse {
    pub project_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitProject>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.submit_project_handler.handle(command).await {
        Ok(project_id) => (
            StatusCode::CREATED,
            Json(SubmitProjectResponse { project_id }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_) | ApplicationError::InvalidKey(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
