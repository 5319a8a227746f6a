use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ride_itinerary::loader::ItineraryState;

use crate::state::AppState;

pub struct ReloadResponse;

impl IntoResponse for ReloadResponse {
    fn into_response(self) -> Response {
        (StatusCode::ACCEPTED, Json(ItineraryState::Loading)).into_response()
    }
}

/// A new page load: issues a fresh request, any pending one is superseded.
pub async fn reload_handler(State(state): State<Arc<AppState>>) -> ReloadResponse {
    state.itinerary.load();
    ReloadResponse
}
