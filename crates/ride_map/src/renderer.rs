use ride_config::{
    defaults::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM},
    latlng::LatLng,
    ride_config::RideConfig,
    waypoint_coordinates::WaypointCoordinates,
};
use tracing::{debug, info};

use crate::{
    map_surface::{ContainerSize, MapBackend, MapContainer, MapSurface, TileLayer},
    route_geometry::{RouteGeometry, resolve_route_geometry},
    styles::{DESTINATION_MARKER, OUTBOUND_PATH, RETURN_PATH, WAYPOINT_MARKER},
    view_bounds::DEFAULT_PADDING_RATIO,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub padding_ratio: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
            tile_layer: TileLayer::default(),
            padding_ratio: DEFAULT_PADDING_RATIO,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Initializing,
    Active,
    /// Surface released. A later mount initializes from scratch.
    Destroyed,
}

/// Host lifecycle signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    Mount(MapContainer),
    Resize(ContainerSize),
    Unmount,
}

#[derive(Debug, Default)]
struct ResizeObserver {
    observed: Option<ContainerSize>,
}

impl ResizeObserver {
    fn observe(&mut self, size: ContainerSize) {
        self.observed = Some(size);
    }

    fn disconnect(&mut self) {
        self.observed = None;
    }

    /// Records `size` and tells whether it differs from the last one seen.
    /// A disconnected observer never reports a change.
    fn changed(&mut self, size: ContainerSize) -> bool {
        match &mut self.observed {
            Some(observed) if *observed != size => {
                *observed = size;
                true
            }
            _ => false,
        }
    }
}

/// Draws the outbound and return legs of a ride on a map surface it owns
/// exclusively, from mount until unmount.
pub struct RouteMapRenderer<B: MapBackend> {
    backend: B,
    route_go: Vec<String>,
    route_back: Vec<String>,
    coordinates: WaypointCoordinates,
    options: MapOptions,

    surface: Option<B::Surface>,
    observer: ResizeObserver,
    state: RendererState,
}

impl<B: MapBackend> RouteMapRenderer<B> {
    pub fn new(
        backend: B,
        route_go: Vec<String>,
        route_back: Vec<String>,
        coordinates: WaypointCoordinates,
        options: MapOptions,
    ) -> Self {
        Self {
            backend,
            route_go,
            route_back,
            coordinates,
            options,
            surface: None,
            observer: ResizeObserver::default(),
            state: RendererState::Uninitialized,
        }
    }

    pub fn for_ride(backend: B, config: &RideConfig, coordinates: &WaypointCoordinates) -> Self {
        Self::new(
            backend,
            config.route_go.clone(),
            config.route_back.clone(),
            coordinates.clone(),
            MapOptions::default(),
        )
    }

    pub fn dispatch(&mut self, event: MapEvent) {
        match event {
            MapEvent::Mount(container) => self.mount(&container),
            MapEvent::Resize(size) => self.resize(size),
            MapEvent::Unmount => self.unmount(),
        }
    }

    /// Creates and draws the surface. No-op while a surface is already owned.
    pub fn mount(&mut self, container: &MapContainer) {
        if self.surface.is_some() {
            debug!("Map {} already mounted, ignoring", container.id);
            return;
        }

        self.state = RendererState::Initializing;

        let mut surface = self.backend.create_surface(container);
        surface.set_view(self.options.center, self.options.zoom);
        surface.add_tile_layer(&self.options.tile_layer);
        surface.add_zoom_control();

        let geometry =
            resolve_route_geometry(&self.route_go, &self.route_back, &self.coordinates);
        draw_route(&mut surface, &geometry, self.options.padding_ratio);

        self.observer.observe(container.size);
        self.surface = Some(surface);
        self.state = RendererState::Active;

        info!("Map {} mounted", container.id);
    }

    pub fn resize(&mut self, size: ContainerSize) {
        if self.state != RendererState::Active {
            return;
        }

        if !self.observer.changed(size) {
            return;
        }

        if let Some(surface) = self.surface.as_mut() {
            surface.invalidate_size();
        }
    }

    /// Releases the surface. Calling it again is a no-op.
    pub fn unmount(&mut self) {
        self.observer.disconnect();

        let Some(mut surface) = self.surface.take() else {
            return;
        };

        surface.remove();
        self.state = RendererState::Destroyed;

        info!("Map unmounted");
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn surface(&self) -> Option<&B::Surface> {
        self.surface.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: MapBackend> Drop for RouteMapRenderer<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn draw_route<S: MapSurface>(surface: &mut S, geometry: &RouteGeometry, padding_ratio: f64) {
    if geometry.outbound.0.is_empty() {
        debug!("Outbound leg has no resolvable waypoint");
    } else {
        surface.add_polyline(&geometry.outbound, &OUTBOUND_PATH);
    }

    if geometry.return_leg.0.is_empty() {
        debug!("Return leg has no resolvable waypoint");
    } else {
        surface.add_polyline(&geometry.return_leg, &RETURN_PATH);
    }

    for marker in &geometry.markers {
        let style = if marker.is_destination {
            &DESTINATION_MARKER
        } else {
            &WAYPOINT_MARKER
        };
        surface.add_circle_marker(marker.position, style, &marker.name);
    }

    match geometry.bounds() {
        Some(bounds) => surface.fit_bounds(&bounds.padded(padding_ratio)),
        None => debug!("Nothing to fit the view to"),
    }
}
