use crate::modules::journals::core::journal::Journal;
use async_trait::async_trait;

/// Read access to recorded journals, newest first.
#[async_trait]
pub trait JournalQueries {
    async fn list(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Journal>>;
}
