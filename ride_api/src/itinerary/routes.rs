use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    itinerary::{get::get_itinerary_handler, reload::reload_handler, schema::schema_handler},
    state::AppState,
};

pub fn itinerary_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/itinerary", get(get_itinerary_handler))
        .route("/itinerary/reload", post(reload_handler))
        .route("/itinerary/schema", get(schema_handler))
}
