use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::judging::use_cases::judging_dashboard::inbound::http as dashboard_http;
use crate::modules::judging::use_cases::submit_project::inbound::http as submit_project_http;
use crate::modules::judging::use_cases::submit_rating::inbound::http as submit_rating_http;
use crate::modules::judging::use_cases::view_leaderboard::inbound::http as leaderboard_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/projects", post(submit_project_http::handle))
        .route("/ratings", post(submit_rating_http::handle))
        .route("/leaderboard", get(leaderboard_http::handle))
        .route("/leaderboard/snapshot", get(leaderboard_http::handle_snapshot))
        .route("/dashboard", get(dashboard_http::handle))
        .with_state(state)
}
