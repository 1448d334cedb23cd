// In memory implementation of the JournalStore and JournalQueries ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep journals in insertion order and reject duplicate identifiers.
// - Serve newest-first pages for the list endpoint.

use crate::modules::journals::core::journal::Journal;
use crate::modules::journals::core::ports::{JournalStore, StoreError};
use crate::modules::journals::use_cases::list_journals::queries_port::JournalQueries;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryJournalStore {
    rows: RwLock<Vec<Journal>>,
    is_offline: bool,
}

impl InMemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl JournalStore for InMemoryJournalStore {
    async fn insert(&self, journal: Journal) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Journal store offline".into()));
        }

        let mut guard = self.rows.write().await;
        if guard.iter().any(|row| row.journal_id == journal.journal_id) {
            return Err(StoreError::Duplicate {
                journal_id: journal.journal_id,
            });
        }
        guard.push(journal);
        Ok(())
    }
}

#[async_trait::async_trait]
impl JournalQueries for InMemoryJournalStore {
    async fn list(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Journal>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Journal store offline"));
        }

        let guard = self.rows.read().await;
        let mut items: Vec<Journal> = guard.iter().rev().cloned().collect();
        // stable sort keeps newest-inserted first among equal timestamps
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let start = offset as usize;
        if start >= items.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(limit as usize).min(items.len());
        Ok(items[start..end].to_vec())
    }
}
