pub mod geojson_surface;
pub mod map_surface;
pub mod renderer;
pub mod route_geometry;
pub mod styles;
pub mod view_bounds;
