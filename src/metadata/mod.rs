//! Typed metadata model consumed by the engine.
//!
//! The engine never builds or loads metadata itself: callers construct
//! [`RegionMetadata`] values from their own data source and hand them over
//! through a [`MetadataProvider`](crate::MetadataProvider) such as
//! [`InMemoryMetadataProvider`].

mod in_memory;
mod region_metadata;

pub use in_memory::InMemoryMetadataProvider;
pub use region_metadata::{FormatRule, NumberPattern, RegionMetadata, TypePattern};
