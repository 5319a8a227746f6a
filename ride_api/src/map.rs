use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use geojson::GeoJson;
use ride_map::{geojson_surface::render_route_geojson, renderer::MapOptions};

use crate::state::AppState;

pub async fn map_handler(State(state): State<Arc<AppState>>) -> Json<GeoJson> {
    let collection = render_route_geojson(
        &state.ride_file.ride,
        &state.ride_file.waypoints,
        MapOptions::default(),
    );

    Json(GeoJson::FeatureCollection(collection))
}
