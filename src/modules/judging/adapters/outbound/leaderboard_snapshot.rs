// Best-effort cache of the last ranked leaderboard for a detached display.
//
// Responsibilities
// - Serialize the ranked entries with the time they were saved under a fixed key.
// - Read back either that shape or a bare list of entries written without a timestamp.
// - Treat a missing, unreadable or undecodable value as "no data", logging why.

use crate::modules::judging::core::team_score::TeamScore;
use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

pub const LEADERBOARD_SNAPSHOT_KEY: &str = "leaderboard_snapshot";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    /// Epoch milliseconds of the save. `None` for snapshots written without one.
    pub updated_at: Option<i64>,
    pub entries: Vec<TeamScore>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSnapshot {
    Stamped(LeaderboardSnapshot),
    Bare(Vec<TeamScore>),
}

pub struct LeaderboardSnapshotCache<TSnapshotStore>
where
    TSnapshotStore: SnapshotStore + ?Sized,
{
    store: Arc<TSnapshotStore>,
}

impl<TSnapshotStore> LeaderboardSnapshotCache<TSnapshotStore>
where
    TSnapshotStore: SnapshotStore + ?Sized,
{
    pub fn new(store: Arc<TSnapshotStore>) -> Self {
        Self { store }
    }

    pub fn save_snapshot(&self, ranked: &[TeamScore]) -> Result<(), SnapshotStoreError> {
        let snapshot = LeaderboardSnapshot {
            updated_at: Some(Utc::now().timestamp_millis()),
            entries: ranked.to_vec(),
        };
        let value = serde_json::to_string(&snapshot)?;
        self.store.write(LEADERBOARD_SNAPSHOT_KEY, &value)?;
        debug!(entries = ranked.len(), "leaderboard snapshot saved");
        Ok(())
    }

    pub fn load_latest(&self) -> Option<LeaderboardSnapshot> {
        let raw = match self.store.read(LEADERBOARD_SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no leaderboard snapshot stored");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read leaderboard snapshot");
                return None;
            }
        };
        match serde_json::from_str::<StoredSnapshot>(&raw) {
            Ok(StoredSnapshot::Stamped(snapshot)) => Some(snapshot),
            Ok(StoredSnapshot::Bare(entries)) => Some(LeaderboardSnapshot {
                updated_at: None,
                entries,
            }),
            Err(e) => {
                warn!(error = %e, "failed to decode leaderboard snapshot");
                None
            }
        }
    }

    pub fn load_snapshot(&self) -> Vec<TeamScore> {
        self.load_latest()
            .map(|snapshot| snapshot.entries)
            .unwrap_or_default()
    }
}
