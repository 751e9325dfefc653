//! Build services for the application layer.

pub mod content_resolver;
pub mod route_map_service;

pub use content_resolver::{ContentResolver, NotFound};
pub use route_map_service::{BuildReport, RouteMapService, fixed_routes};
