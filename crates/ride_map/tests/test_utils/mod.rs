use std::{cell::RefCell, rc::Rc};

use geo::LineString;
use ride_config::{latlng::LatLng, waypoint_coordinates::WaypointCoordinates};
use ride_map::{
    map_surface::{ContainerSize, MapBackend, MapContainer, MapSurface, TileLayer},
    styles::{MarkerStyle, PathStyle},
    view_bounds::ViewBounds,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Create(String),
    SetView(LatLng, u8),
    TileLayer(String),
    ZoomControl,
    Polyline(Vec<(f64, f64)>, PathStyle),
    CircleMarker(String, MarkerStyle),
    FitBounds(ViewBounds),
    InvalidateSize,
    Remove,
}

pub type CallLog = Rc<RefCell<Vec<SurfaceCall>>>;

/// Records every surface call into a log shared with the test.
pub struct RecordingBackend {
    pub log: CallLog,
}

pub struct RecordingSurface {
    log: CallLog,
}

impl MapBackend for RecordingBackend {
    type Surface = RecordingSurface;

    fn create_surface(&mut self, container: &MapContainer) -> RecordingSurface {
        self.log
            .borrow_mut()
            .push(SurfaceCall::Create(container.id.clone()));
        RecordingSurface {
            log: Rc::clone(&self.log),
        }
    }
}

impl MapSurface for RecordingSurface {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.log.borrow_mut().push(SurfaceCall::SetView(center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.log
            .borrow_mut()
            .push(SurfaceCall::TileLayer(layer.url_template.clone()));
    }

    fn add_zoom_control(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::ZoomControl);
    }

    fn add_polyline(&mut self, line: &LineString<f64>, style: &PathStyle) {
        let points = line.coords().map(|coord| (coord.x, coord.y)).collect();
        self.log
            .borrow_mut()
            .push(SurfaceCall::Polyline(points, style.clone()));
    }

    fn add_circle_marker(&mut self, _position: LatLng, style: &MarkerStyle, label: &str) {
        self.log
            .borrow_mut()
            .push(SurfaceCall::CircleMarker(label.to_string(), style.clone()));
    }

    fn fit_bounds(&mut self, bounds: &ViewBounds) {
        self.log.borrow_mut().push(SurfaceCall::FitBounds(*bounds));
    }

    fn invalidate_size(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::InvalidateSize);
    }

    fn remove(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::Remove);
    }
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn abc_coordinates() -> WaypointCoordinates {
    [
        ("A", LatLng::new(3.2, 101.7)),
        ("B", LatLng::new(3.5, 102.4)),
        ("C", LatLng::new(3.9, 102.3)),
    ]
    .into_iter()
    .collect()
}

pub fn container() -> MapContainer {
    MapContainer {
        id: "map".to_string(),
        size: ContainerSize {
            width: 800,
            height: 500,
        },
    }
}

pub fn count(log: &CallLog, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
    log.borrow().iter().filter(|call| predicate(call)).count()
}
