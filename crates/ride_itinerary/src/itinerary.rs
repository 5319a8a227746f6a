use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured answer of the model. Every array keeps the order the service
/// delivered it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Chronological schedule of the ride
    pub itinerary: Vec<ItineraryStop>,
    pub fuel_stations: Vec<FuelStation>,
    pub safety_advice: Vec<String>,
    pub bike_maintenance: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStop {
    pub location: String,

    /// Estimated arrival, 24h clock
    pub time: String,

    /// Cumulative distance from the departure point, in km
    pub distance_from_start: f64,

    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelStation {
    pub name: String,
    pub location: String,

    /// Petronas, Shell, BHP, ...
    pub brand: String,

    /// Why the convoy should refuel here
    pub why_stop: String,
}

impl ItineraryResult {
    /// Total planned distance, taken from the last stop of the schedule.
    pub fn total_distance(&self) -> Option<f64> {
        self.itinerary.last().map(|stop| stop.distance_from_start)
    }
}
