use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use ride_config::ride_file::RideFile;

use crate::state::AppState;

pub async fn ride_handler(State(state): State<Arc<AppState>>) -> Json<RideFile> {
    Json(state.ride_file.clone())
}
