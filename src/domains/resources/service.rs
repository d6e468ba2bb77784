//! Resource service implementation.
//!
//! The ResourceService manages widget resource discovery and access. All
//! contents are static HTML shells, registered once at construction.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The static content of this resource.
    pub content: String,
}

/// Service for listing and reading widget resources.
pub struct ResourceService {
    /// Registered resources, in publication order.
    resources: Vec<ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with all registered resources.
    pub fn new() -> Self {
        info!("Initializing ResourceService");
        Self {
            resources: get_all_resources(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// The declared MIME type is carried into the contents so clients see
    /// the widget type, not a text/plain default.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: entry.content.clone(),
                meta: None,
            }],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 3);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = ResourceService::new();
        let result = service
            .read_resource("ui://widget/dashboard.html")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                mime_type, text, ..
            } => {
                assert_eq!(mime_type.as_deref(), Some(crate::domains::resources::WIDGET_MIME_TYPE));
                assert!(text.contains("dashboard"));
            }
            other => panic!("unexpected contents: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();
        let result = service.read_resource("ui://widget/nonexistent.html").await;
        assert!(result.is_err());
    }
}
