//! Content delivery backends.
//!
//! Provides two [`ContentDelivery`](crate::domain::repositories::ContentDelivery)
//! implementations:
//! - [`HttpContentDelivery`] - Production REST delivery API
//! - [`FixtureContentDelivery`] - JSON files on disk

mod fixture;
mod http;

pub use fixture::FixtureContentDelivery;
pub use http::HttpContentDelivery;
