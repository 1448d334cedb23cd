use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use meal_journal::modules::journals::adapters::outbound::journal_store_in_memory::InMemoryJournalStore;
use meal_journal::modules::journals::use_cases::add_journal::handler::AddJournalHandler;
use meal_journal::shell::config::AppConfig;
use meal_journal::shell::http::router;
use meal_journal::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // In-memory store for now
    let store = Arc::new(InMemoryJournalStore::new());

    let state = AppState {
        add_service: Arc::new(AddJournalHandler::new(store.clone())),
        queries: store,
    };

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("meal journal listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for the shutdown signal");
    }
    tracing::info!("shutting down");
}
