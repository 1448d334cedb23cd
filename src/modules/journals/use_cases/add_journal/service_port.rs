// The capability the add endpoint depends on: create a journal entry from a
// meal name and category. AddJournalHandler is the production implementation,
// AddJournalFn lets a plain closure stand in for it.

use crate::modules::journals::core::journal::{Journal, MealCategory};
use crate::modules::journals::core::ports::JournalStore;
use crate::modules::journals::use_cases::add_journal::command::AddJournal;
use crate::modules::journals::use_cases::add_journal::handler::{
    AddJournalHandler, ApplicationError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::future::Future;
use uuid::Uuid;

#[async_trait]
pub trait AddJournalService: Send + Sync {
    async fn add(&self, name: &str, category: MealCategory) -> Result<Journal, ApplicationError>;
}

#[async_trait]
impl<TStore> AddJournalService for AddJournalHandler<TStore>
where
    TStore: JournalStore + 'static,
{
    async fn add(&self, name: &str, category: MealCategory) -> Result<Journal, ApplicationError> {
        let command = AddJournal {
            journal_id: Uuid::now_v7().to_string(),
            name: name.to_string(),
            category,
            created_at: Utc::now().timestamp_millis(),
        };
        self.handle(command).await
    }
}

/// Adapter turning an async closure into an [`AddJournalService`].
pub struct AddJournalFn<F>(pub F);

#[async_trait]
impl<F, Fut> AddJournalService for AddJournalFn<F>
where
    F: Fn(String, MealCategory) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Journal, ApplicationError>> + Send + 'static,
{
    async fn add(&self, name: &str, category: MealCategory) -> Result<Journal, ApplicationError> {
        (self.0)(name.to_string(), category).await
    }
}
