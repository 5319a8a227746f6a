use serde::{Deserialize, Serialize};

/// A geographic position. Serialized as `[lat, lng]`, the order map widgets expect.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        LatLng { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<&LatLng> for geo_types::Point<f64> {
    fn from(value: &LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::LatLng;

    #[test]
    fn test_coord_axis_order() {
        let coord: geo_types::Coord<f64> = LatLng::new(3.2, 101.7).into();

        assert_eq!(coord.x, 101.7);
        assert_eq!(coord.y, 3.2);
    }

    #[test]
    fn test_serialized_as_lat_lng_pair() {
        let json = serde_json::to_string(&LatLng::new(3.5, 102.4)).unwrap();
        assert_eq!(json, "[3.5,102.4]");

        let parsed: LatLng = serde_json::from_str("[4.1, 102.0]").unwrap();
        assert_eq!(parsed, LatLng::new(4.1, 102.0));
    }
}
