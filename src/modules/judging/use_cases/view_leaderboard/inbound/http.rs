use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::judging::use_cases::view_leaderboard::projection::LeaderboardRow;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ViewLeaderboardParams {
    pub refresh_snapshot: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ViewLeaderboardParams>,
) -> impl IntoResponse {
    match state
        .view_leaderboard_handler
        .handle(params.refresh_snapshot.unwrap_or(false))
        .await
    {
        Ok(ranked) => Json(
            ranked
                .into_iter()
                .map(LeaderboardRow::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Last saved snapshot, or an empty one when none can be read.
pub async fn handle_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.snapshots.load_latest().unwrap_or_default())
}
