use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::bike_spec::BikeSpec;

/// Distance band, in kilometres, between two recommended refuelling stops.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefuelInterval {
    pub min: u32,
    pub max: u32,
}

impl Default for RefuelInterval {
    fn default() -> Self {
        RefuelInterval { min: 100, max: 130 }
    }
}

/// Static description of the ride. Supplied by the host application and never
/// mutated by the itinerary fetcher or the map renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideConfig {
    pub date: Date,
    pub take_off_time: Time,
    pub bikes: Vec<String>,
    pub route_go: Vec<String>,
    pub route_back: Vec<String>,

    #[serde(default)]
    pub bike_specs: Vec<BikeSpec>,

    #[serde(default)]
    pub refuel_interval_km: RefuelInterval,
}

impl RideConfig {
    /// Departure time as `HH:MM`.
    pub fn take_off_label(&self) -> String {
        self.take_off_time.strftime("%H:%M").to_string()
    }

    pub fn bike_spec(&self, model: &str) -> Option<&BikeSpec> {
        self.bike_specs.iter().find(|spec| spec.model == model)
    }
}
