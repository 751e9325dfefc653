//! Domain layer: routing entities and the content-delivery contract.
//!
//! # Architecture
//!
//! - [`entities`] - Blog content and route map data structures
//! - [`repositories`] - Content delivery trait definition
//!
//! The domain layer has no dependency on infrastructure; the build logic that
//! ties both together lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
