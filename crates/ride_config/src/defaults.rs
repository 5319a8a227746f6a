//! The Setapak to Jerantut ride, January 2026.

use jiff::civil;

use crate::{
    bike_spec::BikeSpec, latlng::LatLng, ride_config::RefuelInterval, ride_config::RideConfig,
    waypoint_coordinates::WaypointCoordinates,
};

pub const DEFAULT_MAP_CENTER: LatLng = LatLng::new(3.7, 102.1);
pub const DEFAULT_MAP_ZOOM: u8 = 8;

pub fn jerantut_ride() -> RideConfig {
    RideConfig {
        date: civil::date(2026, 1, 25),
        take_off_time: civil::time(6, 30, 0, 0),
        bikes: vec!["Honda RS150".to_string(), "Yamaha Y16".to_string()],
        route_go: ["Setapak", "Bentong", "Temerloh", "Jerantut"]
            .map(String::from)
            .to_vec(),
        route_back: ["Jerantut", "Kuala Lipis", "Raub", "Bentong", "Setapak"]
            .map(String::from)
            .to_vec(),
        bike_specs: vec![
            BikeSpec {
                model: "Honda RS150".to_string(),
                engine: "149cc DOHC liquid-cooled".to_string(),
                power: "16.6 PS @ 9,000 rpm".to_string(),
                fuel_capacity_litres: 4.5,
                weight_kg: 122.0,
            },
            BikeSpec {
                model: "Yamaha Y16".to_string(),
                engine: "155cc SOHC VVA liquid-cooled".to_string(),
                power: "19.3 PS @ 10,000 rpm".to_string(),
                fuel_capacity_litres: 5.4,
                weight_kg: 120.0,
            },
        ],
        refuel_interval_km: RefuelInterval::default(),
    }
}

pub fn jerantut_waypoints() -> WaypointCoordinates {
    [
        ("Setapak", LatLng::new(3.1979, 101.7146)),
        ("Bentong", LatLng::new(3.5225, 101.9086)),
        ("Temerloh", LatLng::new(3.4486, 102.4176)),
        ("Jerantut", LatLng::new(3.9360, 102.3626)),
        ("Kuala Lipis", LatLng::new(4.1842, 102.0468)),
        ("Raub", LatLng::new(3.7921, 101.8574)),
    ]
    .into_iter()
    .collect()
}
