use fxhash::FxHashSet;
use geo::{Coord, LineString};
use ride_config::{latlng::LatLng, waypoint_coordinates::WaypointCoordinates};
use tracing::debug;

use crate::view_bounds::ViewBounds;

#[derive(Debug, Clone, PartialEq)]
pub struct WaypointMarker {
    pub name: String,
    pub position: LatLng,
    pub is_destination: bool,
}

/// Drawable geometry of a ride: both legs plus one marker per distinct waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    pub outbound: LineString<f64>,
    pub return_leg: LineString<f64>,
    pub markers: Vec<WaypointMarker>,
}

impl RouteGeometry {
    /// Region covering both legs, `None` when neither leg has a point.
    pub fn bounds(&self) -> Option<ViewBounds> {
        let bounds: ViewBounds = self
            .outbound
            .coords()
            .chain(self.return_leg.coords())
            .copied()
            .collect();

        (!bounds.is_empty()).then_some(bounds)
    }
}

/// Resolves waypoint names to a line, dropping names absent from the lookup.
pub fn resolve_leg(names: &[String], coordinates: &WaypointCoordinates) -> LineString<f64> {
    names
        .iter()
        .filter_map(|name| match coordinates.get(name) {
            Some(position) => Some(Coord::from(position)),
            None => {
                debug!("Skipping waypoint {} without coordinates", name);
                None
            }
        })
        .collect::<Vec<_>>()
        .into()
}

pub fn resolve_route_geometry(
    route_go: &[String],
    route_back: &[String],
    coordinates: &WaypointCoordinates,
) -> RouteGeometry {
    let destination = route_go
        .iter()
        .rev()
        .find(|name| coordinates.contains(name));

    let mut seen = FxHashSet::default();
    let mut markers = Vec::new();
    for name in route_go.iter().chain(route_back.iter()) {
        if !seen.insert(name.as_str()) {
            continue;
        }

        if let Some(position) = coordinates.get(name) {
            markers.push(WaypointMarker {
                name: name.clone(),
                position,
                is_destination: destination == Some(name),
            });
        }
    }

    RouteGeometry {
        outbound: resolve_leg(route_go, coordinates),
        return_leg: resolve_leg(route_back, coordinates),
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn abc_coordinates() -> WaypointCoordinates {
        [
            ("A", LatLng::new(3.0, 101.0)),
            ("B", LatLng::new(3.5, 102.0)),
            ("C", LatLng::new(4.0, 102.5)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_leg_keeps_order() {
        let line = resolve_leg(&names(&["C", "A"]), &abc_coordinates());

        assert_eq!(
            line.coords().copied().collect::<Vec<_>>(),
            vec![Coord { x: 102.5, y: 4.0 }, Coord { x: 101.0, y: 3.0 }]
        );
    }

    #[test]
    fn test_markers_are_deduplicated() {
        let geometry = resolve_route_geometry(
            &names(&["A", "B", "C"]),
            &names(&["C", "B", "A"]),
            &abc_coordinates(),
        );

        assert_eq!(geometry.outbound.coords().count(), 3);
        assert_eq!(geometry.return_leg.coords().count(), 3);

        let marker_names: Vec<&str> = geometry.markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(marker_names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_destination_is_last_resolvable_outbound_waypoint() {
        let geometry = resolve_route_geometry(
            &names(&["A", "B", "Z"]),
            &names(&["Z", "C"]),
            &abc_coordinates(),
        );

        let destinations: Vec<&str> = geometry
            .markers
            .iter()
            .filter(|marker| marker.is_destination)
            .map(|marker| marker.name.as_str())
            .collect();

        assert_eq!(destinations, vec!["B"]);
    }

    #[test]
    fn test_empty_routes_have_no_bounds() {
        let geometry = resolve_route_geometry(&names(&["X"]), &[], &abc_coordinates());

        assert_eq!(geometry.outbound.coords().count(), 0);
        assert!(geometry.markers.is_empty());
        assert!(geometry.bounds().is_none());
    }
}
