//! Resources domain module.
//!
//! Widget resources: the static HTML shells that tool outputs hydrate.
//! Each tool's result carries the URI of the matching widget template.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per widget)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

/// MIME type for embedded HTML widget resources.
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
