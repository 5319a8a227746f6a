use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::latlng::LatLng;

/// Read-only lookup from waypoint name to coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointCoordinates {
    coordinates: FxHashMap<String, LatLng>,
}

impl WaypointCoordinates {
    pub fn get(&self, name: &str) -> Option<LatLng> {
        self.coordinates.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.coordinates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Names from `names` that have no entry in the lookup, in input order.
    pub fn missing<'a, I>(&self, names: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        names
            .into_iter()
            .filter(|name| !self.contains(name))
            .map(String::as_str)
            .collect()
    }
}

impl<N> FromIterator<(N, LatLng)> for WaypointCoordinates
where
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, LatLng)>>(iter: T) -> Self {
        WaypointCoordinates {
            coordinates: iter
                .into_iter()
                .map(|(name, coords)| (name.into(), coords))
                .collect(),
        }
    }
}
