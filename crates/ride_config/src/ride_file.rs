use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{defaults, ride_config::RideConfig, waypoint_coordinates::WaypointCoordinates};

pub const RIDE_CONFIG_ENV_VAR: &str = "RIDE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid ride file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ride description plus the coordinate table its waypoints resolve against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideFile {
    pub ride: RideConfig,
    pub waypoints: WaypointCoordinates,
}

impl RideFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let ride_file: RideFile = serde_json::from_reader(BufReader::new(file))?;
        ride_file.warn_missing_waypoints();

        Ok(ride_file)
    }

    /// Reads the file named by `RIDE_CONFIG`, or falls back to the built-in ride.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(RIDE_CONFIG_ENV_VAR) {
            Ok(path) => {
                debug!("Loading ride file from {}", path);
                Self::load(path)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    fn warn_missing_waypoints(&self) {
        let missing = self
            .waypoints
            .missing(self.ride.route_go.iter().chain(self.ride.route_back.iter()));

        if !missing.is_empty() {
            warn!("Waypoints without coordinates will not be drawn: {:?}", missing);
        }
    }
}

impl Default for RideFile {
    fn default() -> Self {
        RideFile {
            ride: defaults::jerantut_ride(),
            waypoints: defaults::jerantut_waypoints(),
        }
    }
}
