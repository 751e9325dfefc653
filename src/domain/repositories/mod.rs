//! Capability traits implemented by the infrastructure layer.
//!
//! Traits define the contract; concrete backends live in
//! `crate::infrastructure::delivery`, and `mockall` mocks are generated for
//! unit tests.

pub mod content_delivery;

pub use content_delivery::{ContentDelivery, DeliveryError, RawContentItem};

#[cfg(test)]
pub use content_delivery::MockContentDelivery;
