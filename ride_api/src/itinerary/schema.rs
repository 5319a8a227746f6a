use axum::Json;
use ride_itinerary::response_schema::response_schema;

pub async fn schema_handler() -> Json<serde_json::Value> {
    Json(response_schema())
}
