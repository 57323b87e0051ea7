// Leaderboard query over the stored projects and ratings.
//
// Responsibilities
// - Load both collections, rank them, optionally refresh the display snapshot.
// - Listing failures propagate; snapshot failures are only logged.

use crate::modules::judging::adapters::outbound::judging_records::{load_projects, load_ratings};
use crate::modules::judging::adapters::outbound::leaderboard_snapshot::LeaderboardSnapshotCache;
use crate::modules::judging::core::ranking::{RankedProject, rank_projects};
use crate::modules::judging::core::team_score::to_team_scores;
use crate::modules::judging::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::document_store::DocumentStore;
use crate::shared::infrastructure::snapshot_store::SnapshotStore;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ViewLeaderboardHandler<TDocumentStore, TSnapshotStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
    TSnapshotStore: SnapshotStore + ?Sized + 'static,
{
    store: Arc<TDocumentStore>,
    snapshots: Arc<LeaderboardSnapshotCache<TSnapshotStore>>,
}

impl<TDocumentStore, TSnapshotStore> ViewLeaderboardHandler<TDocumentStore, TSnapshotStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
    TSnapshotStore: SnapshotStore + ?Sized + 'static,
{
    pub fn new(
        store: Arc<TDocumentStore>,
        snapshots: Arc<LeaderboardSnapshotCache<TSnapshotStore>>,
    ) -> Self {
        Self { store, snapshots }
    }

    pub async fn handle(&self, refresh_snapshot: bool) -> Result<Vec<RankedProject>, ApplicationError> {
        let projects = load_projects(self.store.as_ref())
            .await
            .inspect_err(|e| error!(error = %e, "failed to list projects"))?;
        let ratings = load_ratings(self.store.as_ref())
            .await
            .inspect_err(|e| error!(error = %e, "failed to list ratings"))?;

        let ranked = rank_projects(&projects, &ratings);
        info!(
            projects = projects.len(),
            ratings = ratings.len(),
            "leaderboard ranked"
        );

        if refresh_snapshot
            && let Err(e) = self.snapshots.save_snapshot(&to_team_scores(&ranked))
        {
            warn!(error = %e, "failed to refresh leaderboard snapshot");
        }
        Ok(ranked)
    }
}

#[cfg(test)]
mod view_leaderboard_handler_tests {
    use super::*;
    use crate::modules::judging::core::project::PROJECTS_COLLECTION;
    use crate::modules::judging::core::rating::{RATINGS_COLLECTION, RatingKey};
    use crate::shared::infrastructure::document_store::Record;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
    use crate::shared::infrastructure::snapshot_store::in_memory::InMemorySnapshotStore;
    use crate::tests::fixtures::ratings::rating_with_sum;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    type BeforeEachReturn = (Arc<InMemoryDocumentStore>, Arc<InMemorySnapshotStore>);

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    async fn seed_project(store: &InMemoryDocumentStore, id: &str, team_name: &str) {
        store
            .set(
                PROJECTS_COLLECTION,
                id,
                record(json!({ "teamName": team_name, "title": format!("{team_name} app") })),
            )
            .await
            .unwrap();
    }

    async fn seed_rating(store: &InMemoryDocumentStore, project_id: &str, judge_id: &str, sum: f64) {
        let key = RatingKey::new(project_id, judge_id).unwrap();
        store
            .set(
                RATINGS_COLLECTION,
                key.as_str(),
                rating_with_sum(project_id, judge_id, sum).to_record(),
            )
            .await
            .unwrap();
    }

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        (
            Arc::new(InMemoryDocumentStore::new()),
            Arc::new(InMemorySnapshotStore::new()),
        )
    }

    fn handler(
        store: Arc<InMemoryDocumentStore>,
        snapshots: Arc<InMemorySnapshotStore>,
    ) -> ViewLeaderboardHandler<InMemoryDocumentStore, InMemorySnapshotStore> {
        ViewLeaderboardHandler::new(store, Arc::new(LeaderboardSnapshotCache::new(snapshots)))
    }

    #[rstest]
    #[tokio::test]
    async fn handle_ranks_every_stored_project(before_each: BeforeEachReturn) {
        let (store, snapshots) = before_each;
        seed_project(&store, "a", "Falcons").await;
        seed_project(&store, "b", "V4").await;
        seed_project(&store, "c", "Idle").await;
        seed_rating(&store, "a", "het@s4ds.com", 70.0).await;
        seed_rating(&store, "b", "het@s4ds.com", 90.0).await;
        seed_rating(&store, "b", "lekhraj@s4ds.com", 80.0).await;

        let ranked = handler(store, snapshots).handle(false).await.unwrap();
        let order: Vec<(&str, usize)> = ranked
            .iter()
            .map(|row| (row.project.id.as_str(), row.rank))
            .collect();
        assert_eq!(order, vec![("b", 1), ("a", 2), ("c", 3)]);
        assert_eq!(ranked[0].aggregate.overall_average, 85.0);
        assert_eq!(ranked[2].aggregate.evaluation_count, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_saves_the_snapshot_only_when_asked(before_each: BeforeEachReturn) {
        let (store, snapshots) = before_each;
        seed_project(&store, "a", "Falcons").await;
        seed_rating(&store, "a", "het@s4ds.com", 85.0).await;
        let cache = LeaderboardSnapshotCache::new(snapshots.clone());
        let handler = handler(store, snapshots);

        handler.handle(false).await.unwrap();
        assert!(cache.load_latest().is_none());

        handler.handle(true).await.unwrap();
        let entries = cache.load_snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].team_name, "Falcons");
        assert_eq!(entries[0].project_name, "Falcons app");
        assert_eq!(entries[0].score, 85.0);
        assert_eq!(entries[0].rank, Some(1));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_succeeds_when_the_snapshot_store_is_offline(before_each: BeforeEachReturn) {
        let (store, _) = before_each;
        seed_project(&store, "a", "Falcons").await;
        let mut snapshots = InMemorySnapshotStore::new();
        snapshots.toggle_offline();

        let ranked = handler(store, Arc::new(snapshots)).handle(true).await.unwrap();
        assert_eq!(ranked.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_fails_if_the_document_store_is_offline(before_each: BeforeEachReturn) {
        let (_, snapshots) = before_each;
        let mut store = InMemoryDocumentStore::new();
        store.toggle_offline();
        let result = handler(Arc::new(store), snapshots).handle(false).await;
        assert!(matches!(result, Err(ApplicationError::Store(_))));
    }
}
