use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeSpec {
    /// Must match one of the identifiers in `RideConfig::bikes`
    pub model: String,
    pub engine: String,
    pub power: String,
    pub fuel_capacity_litres: f64,
    pub weight_kg: f64,
}
