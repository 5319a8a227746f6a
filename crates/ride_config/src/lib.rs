pub mod bike_spec;
pub mod defaults;
pub mod latlng;
pub mod ride_config;
pub mod ride_file;
pub mod waypoint_coordinates;
