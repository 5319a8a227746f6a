use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use ride_config::{
    latlng::LatLng, ride_config::RideConfig, waypoint_coordinates::WaypointCoordinates,
};
use serde_json::json;

use crate::{
    map_surface::{ContainerSize, MapBackend, MapContainer, MapSurface, TileLayer},
    renderer::{MapOptions, RouteMapRenderer},
    styles::{MarkerStyle, PathStyle, style_properties},
    view_bounds::ViewBounds,
};

/// A map surface that keeps everything drawn on it as GeoJSON features, with
/// the style options stored as feature properties.
#[derive(Debug, Default)]
pub struct GeoJsonSurface {
    container_id: String,
    view: Option<(LatLng, u8)>,
    tile_layer: Option<TileLayer>,
    zoom_control: bool,
    features: Vec<Feature>,
    fitted_bounds: Option<ViewBounds>,
    size_invalidations: usize,
}

impl GeoJsonSurface {
    pub fn new<S: Into<String>>(container_id: S) -> Self {
        GeoJsonSurface {
            container_id: container_id.into(),
            ..Default::default()
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn fitted_bounds(&self) -> Option<ViewBounds> {
        self.fitted_bounds
    }

    pub fn size_invalidations(&self) -> usize {
        self.size_invalidations
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut foreign_members = JsonObject::new();
        foreign_members.insert("container".to_string(), json!(self.container_id));
        foreign_members.insert("zoomControl".to_string(), json!(self.zoom_control));

        if let Some((center, zoom)) = self.view {
            foreign_members.insert("center".to_string(), json!([center.lat, center.lng]));
            foreign_members.insert("zoom".to_string(), json!(zoom));
        }

        if let Some(tile_layer) = &self.tile_layer {
            foreign_members.insert("tileLayer".to_string(), json!(tile_layer));
        }

        FeatureCollection {
            bbox: self.fitted_bounds.map(|bounds| bounds.to_bbox()),
            features: self.features.clone(),
            foreign_members: Some(foreign_members),
        }
    }
}

impl MapSurface for GeoJsonSurface {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layer = Some(layer.clone());
    }

    fn add_zoom_control(&mut self) {
        self.zoom_control = true;
    }

    fn add_polyline(&mut self, line: &LineString<f64>, style: &PathStyle) {
        let mut properties = style_properties(style);
        properties.insert("kind".to_string(), JsonValue::from("path"));

        self.features.push(Feature {
            geometry: Some(Geometry::from(line)),
            properties: Some(properties),
            ..Default::default()
        });
    }

    fn add_circle_marker(&mut self, position: LatLng, style: &MarkerStyle, label: &str) {
        let mut properties = style_properties(style);
        properties.insert("kind".to_string(), JsonValue::from("marker"));
        properties.insert("popup".to_string(), JsonValue::from(label));

        self.features.push(Feature {
            geometry: Some(Geometry::new(Value::Point(vec![position.lng, position.lat]))),
            properties: Some(properties),
            ..Default::default()
        });
    }

    fn fit_bounds(&mut self, bounds: &ViewBounds) {
        self.fitted_bounds = Some(*bounds);
    }

    fn invalidate_size(&mut self) {
        self.size_invalidations += 1;
    }

    fn remove(&mut self) {
        self.features.clear();
        self.tile_layer = None;
        self.zoom_control = false;
    }
}

#[derive(Debug, Default)]
pub struct GeoJsonBackend {
    created: usize,
}

impl GeoJsonBackend {
    /// Number of surfaces created so far.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl MapBackend for GeoJsonBackend {
    type Surface = GeoJsonSurface;

    fn create_surface(&mut self, container: &MapContainer) -> GeoJsonSurface {
        self.created += 1;
        GeoJsonSurface::new(container.id.clone())
    }
}

/// Mounts a renderer on a GeoJSON surface, exports what was drawn and tears
/// the renderer down again.
pub fn render_route_geojson(
    config: &RideConfig,
    coordinates: &WaypointCoordinates,
    options: MapOptions,
) -> FeatureCollection {
    let mut renderer = RouteMapRenderer::new(
        GeoJsonBackend::default(),
        config.route_go.clone(),
        config.route_back.clone(),
        coordinates.clone(),
        options,
    );

    renderer.mount(&MapContainer {
        id: "route-map".to_string(),
        size: ContainerSize {
            width: 1280,
            height: 500,
        },
    });

    let collection = renderer
        .surface()
        .map(GeoJsonSurface::to_feature_collection)
        .unwrap_or_else(|| FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        });

    renderer.unmount();
    collection
}
