//! Application layer: the route map build.
//!
//! Services consume the [`crate::domain::repositories::ContentDelivery`]
//! trait and never a concrete backend.
//!
//! # Available Services
//!
//! - [`services::content_resolver::ContentResolver`] - Typed blog content reads
//! - [`services::route_map_service::RouteMapService`] - Route map construction

pub mod services;
