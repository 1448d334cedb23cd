use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::modules::journals::use_cases::add_journal::inbound::http as add_http;
use crate::modules::journals::use_cases::list_journals::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/add", any(add_http::handle))
        .route("/list", get(list_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
