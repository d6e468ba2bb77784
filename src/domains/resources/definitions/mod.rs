//! Resource definitions module.
//!
//! Each widget resource is defined in its own file: a URI, metadata, and a
//! static HTML shell that the matching tool's output hydrates.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_widget.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod dashboard_widget;
mod metrics_widget;
mod user_widget;

pub use dashboard_widget::DashboardWidget;
pub use metrics_widget::MetricsWidget;
pub use user_widget::UserWidget;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and
/// content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> String;
}
