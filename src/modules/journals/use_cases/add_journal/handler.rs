use crate::modules::journals::core::journal::Journal;
use crate::modules::journals::core::ports::{JournalStore, StoreError};
use crate::modules::journals::use_cases::add_journal::command::AddJournal;
use crate::modules::journals::use_cases::add_journal::decide::decide_add;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

/// Domain service that validates a new journal entry and persists it.
pub struct AddJournalHandler<TStore>
where
    TStore: JournalStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddJournalHandler<TStore>
where
    TStore: JournalStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddJournal) -> Result<Journal, ApplicationError> {
        let journal =
            decide_add(command).map_err(|reason| ApplicationError::Domain(reason.to_string()))?;

        self.store.insert(journal.clone()).await?;

        tracing::info!(
            journal_id = %journal.journal_id,
            category = journal.category.code(),
            "journal added"
        );
        Ok(journal)
    }
}
