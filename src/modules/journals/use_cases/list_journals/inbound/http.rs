use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

const DEFAULT_LIMIT: u64 = 20;

#[derive(Deserialize)]
pub struct ListJournalsParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListJournalsParams>,
) -> impl IntoResponse {
    match state
        .queries
        .list(params.offset.unwrap_or(0), params.limit.unwrap_or(DEFAULT_LIMIT))
        .await
    {
        Ok(journals) => Json(journals).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list journals");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
