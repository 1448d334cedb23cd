use crate::modules::journals::use_cases::add_journal::service_port::AddJournalService;
use crate::modules::journals::use_cases::list_journals::queries_port::JournalQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_service: Arc<dyn AddJournalService>,
    pub queries: Arc<dyn JournalQueries + Send + Sync>,
}
