use geo::LineString;
use ride_config::latlng::LatLng;
use serde::{Deserialize, Serialize};

use crate::{
    styles::{MarkerStyle, PathStyle},
    view_bounds::ViewBounds,
};

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        TileLayer {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

/// The element a map surface is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapContainer {
    pub id: String,
    pub size: ContainerSize,
}

/// An interactive map widget. Overlays live until `remove` is called.
pub trait MapSurface {
    fn set_view(&mut self, center: LatLng, zoom: u8);

    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn add_zoom_control(&mut self);

    fn add_polyline(&mut self, line: &LineString<f64>, style: &PathStyle);

    /// `label` is shown on demand, when the marker is interacted with.
    fn add_circle_marker(&mut self, position: LatLng, style: &MarkerStyle, label: &str);

    fn fit_bounds(&mut self, bounds: &ViewBounds);

    /// Drops the cached container size so the next draw measures it again.
    fn invalidate_size(&mut self);

    /// Releases every overlay and listener of the surface.
    fn remove(&mut self);
}

/// Creates map surfaces bound to a container.
pub trait MapBackend {
    type Surface: MapSurface;

    fn create_surface(&mut self, container: &MapContainer) -> Self::Surface;
}
