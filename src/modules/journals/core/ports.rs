// Ports describe what the journals core needs from storage, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Testing guidance
// - Use the in memory store for tests and local development.

use crate::modules::journals::core::journal::Journal;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("journal already exists: {journal_id}")]
    Duplicate { journal_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn insert(&self, journal: Journal) -> Result<(), StoreError>;
}
