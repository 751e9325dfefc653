//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`delivery`] - Content delivery backends (HTTP and fixture files)
//! - [`export`] - Route map serialization and output

pub mod delivery;
pub mod export;
