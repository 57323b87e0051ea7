use crate::modules::judging::adapters::outbound::leaderboard_snapshot::LeaderboardSnapshotCache;
use crate::modules::judging::use_cases::judging_dashboard::handler::JudgingDashboardHandler;
use crate::modules::judging::use_cases::submit_project::handler::SubmitProjectHandler;
use crate::modules::judging::use_cases::submit_rating::handler::SubmitRatingHandler;
use crate::modules::judging::use_cases::view_leaderboard::handler::ViewLeaderboardHandler;
use crate::shared::infrastructure::document_store::DocumentStore;
use crate::shared::infrastructure::snapshot_store::SnapshotStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submit_rating_handler: Arc<SubmitRatingHandler<dyn DocumentStore>>,
    pub submit_project_handler: Arc<SubmitProjectHandler<dyn DocumentStore>>,
    pub view_leaderboard_handler:
        Arc<ViewLeaderboardHandler<dyn DocumentStore, dyn SnapshotStore>>,
    pub judging_dashboard_handler: Arc<JudgingDashboardHandler<dyn DocumentStore>>,
    pub snapshots: Arc<LeaderboardSnapshotCache<dyn SnapshotStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, snapshot_store: Arc<dyn SnapshotStore>) -> Self {
        let snapshots = Arc::new(LeaderboardSnapshotCache::new(snapshot_store));
        Self {
            submit_rating_handler: Arc::new(SubmitRatingHandler::new(store.clone())),
            submit_project_handler: Arc::new(SubmitProjectHandler::new(store.clone())),
            view_leaderboard_handler: Arc::new(ViewLeaderboardHandler::new(
                store.clone(),
                snapshots.clone(),
            )),
            judging_dashboard_handler: Arc::new(JudgingDashboardHandler::new(store)),
            snapshots,
        }
    }
}
