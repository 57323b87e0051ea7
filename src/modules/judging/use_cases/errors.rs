use crate::modules::judging::core::rating::RatingKeyError;
use crate::shared::infrastructure::document_store::DocumentStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidKey(#[from] RatingKeyError),

    #[error(transparent)]
    Store(#[from] DocumentStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),
}
