//! Resource Registry - central registration of all widget resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{DashboardWidget, MetricsWidget, ResourceDefinition, UserWidget};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources, in publication order.
///
/// This is the central place where all widget resources are registered.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<DashboardWidget>(),
        build_resource::<MetricsWidget>(),
        build_resource::<UserWidget>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![DashboardWidget::URI, MetricsWidget::URI, UserWidget::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 3);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"ui://widget/dashboard.html"));
        assert!(uris.contains(&"ui://widget/metrics.html"));
        assert!(uris.contains(&"ui://widget/user.html"));
    }

    #[test]
    fn test_resource_uris_match_entries() {
        let uris = resource_uris();
        let entries = get_all_resources();
        assert_eq!(uris.len(), entries.len());
        for (uri, entry) in uris.iter().zip(&entries) {
            assert_eq!(*uri, entry.resource.raw.uri);
        }
    }
}
