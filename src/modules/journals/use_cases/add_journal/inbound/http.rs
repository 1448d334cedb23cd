use axum::{
    body::Body,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::journals::core::journal::MealCategory;
use crate::shell::state::AppState;

pub const MEAL_NAME: &str = "sunny side up";
pub const MEAL_CATEGORY: MealCategory = MealCategory::Breakfast;
pub const REGISTER_FAILED_MESSAGE: &str = "failed to register your meal's information\n";

/// Records a meal and answers with the created journal as JSON.
///
/// Mounted for every method so that the 405 answer carries the same
/// `application/json` content type as the other outcomes.
pub async fn handle(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::POST {
        return json_response(StatusCode::METHOD_NOT_ALLOWED, Body::empty());
    }

    match state.add_service.add(MEAL_NAME, MEAL_CATEGORY).await {
        Ok(journal) => encode(&journal),
        Err(err) => {
            tracing::error!(error = %err, "failed to create a new journal");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Body::from(REGISTER_FAILED_MESSAGE),
            )
        }
    }
}

fn encode<T: Serialize>(record: &T) -> Response {
    match serde_json::to_vec(record) {
        Ok(body) => json_response(StatusCode::OK, Body::from(body)),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode the journal");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, Body::empty())
        }
    }
}

fn json_response(status: StatusCode, body: Body) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
