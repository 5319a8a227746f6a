use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ride_itinerary::loader::ItineraryState;

use crate::state::AppState;

/// `{"status": "loading"}` while pending, `{"status": "ready", "itinerary": ...}`
/// once settled, `{"status": "unavailable"}` when the fetch failed.
pub struct ItineraryResponse(ItineraryState);

impl IntoResponse for ItineraryResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

pub async fn get_itinerary_handler(State(state): State<Arc<AppState>>) -> ItineraryResponse {
    ItineraryResponse(state.itinerary.state())
}
