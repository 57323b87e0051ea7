// Rating submission orchestrates the create-or-update of one judge's rating.
//
// Responsibilities
// - Derive the document id from project id and judge id.
// - Create the full record on first submission, overwrite the criteria afterwards.
// - Recompute scoreSum on every write; the store refreshes the timestamp.
// - Surface store failures unchanged. No retries.

use crate::modules::judging::core::rating::{RATINGS_COLLECTION, Rating, RatingKey};
use crate::modules::judging::use_cases::errors::ApplicationError;
use crate::modules::judging::use_cases::submit_rating::command::SubmitRating;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;
use tracing::{error, info};

pub struct SubmitRatingHandler<TDocumentStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
{
    store: Arc<TDocumentStore>,
}

impl<TDocumentStore> SubmitRatingHandler<TDocumentStore>
where
    TDocumentStore: DocumentStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TDocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitRating) -> Result<(), ApplicationError> {
        let scores = command.scores();
        if !scores.is_finite() {
            return Err(ApplicationError::Domain(
                "scores must be finite numbers".to_string(),
            ));
        }
        let key = RatingKey::new(&command.project_id, &command.judge_id)?;

        let existing = self
            .store
            .get(RATINGS_COLLECTION, key.as_str())
            .await
            .inspect_err(|e| error!(key = key.as_str(), error = %e, "failed to look up rating"))?;

        match existing {
            None => {
                let rating = Rating::new(command.project_id, command.judge_id, scores);
                self.store
                    .set(RATINGS_COLLECTION, key.as_str(), rating.to_record())
                    .await
                    .inspect_err(|e| error!(key = key.as_str(), error = %e, "failed to create rating"))?;
                info!(key = key.as_str(), score_sum = rating.score_sum, "rating created");
            }
            Some(_) => {
                self.store
                    .update(RATINGS_COLLECTION, key.as_str(), scores.to_record())
                    .await
                    .inspect_err(|e| error!(key = key.as_str(), error = %e, "failed to update rating"))?;
                info!(key = key.as_str(), score_sum = scores.sum(), "rating updated");
            }
        }
        Ok(())
    }
}
