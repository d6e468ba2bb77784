//! Descriptor Generator - the published projection of the registry.
//!
//! External callers discover the tool set through a machine-readable
//! descriptor: one operation entry per registered tool, in registration
//! order, with the parameter schema and a uniform response shape. The
//! descriptor is a pure function of the registry; since the registry is
//! immutable after startup, the first generation is cached for the life of
//! the process and every serialization is byte-identical.

use rmcp::model::Tool;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::{Arc, OnceLock};
use tracing::info;

use super::definition::ToolDefinition;
use super::registry::ToolRegistry;
use super::schema::json_schema;

/// The externally published interface description.
#[derive(Debug, Clone, Serialize)]
pub struct Descriptor {
    /// Server name, as reported to clients.
    pub name: String,
    /// Server version.
    pub version: String,
    /// One entry per registered tool, in registration order.
    pub operations: Vec<OperationEntry>,
}

/// One operation in the descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct OperationEntry {
    /// Stable, URL-safe identifier; identity-mapped from the tool name.
    #[serde(rename = "operationId")]
    pub operation_id: String,
    pub description: String,
    /// JSON Schema for the operation's parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    /// Response shape; a single string-valued markup field for every
    /// operation.
    pub response: Value,
}

/// Lazily generates and caches the descriptor for an immutable registry.
pub struct DescriptorGenerator {
    registry: Arc<ToolRegistry>,
    server_name: String,
    server_version: String,
    cache: OnceLock<Arc<Descriptor>>,
}

impl DescriptorGenerator {
    pub fn new(
        registry: Arc<ToolRegistry>,
        server_name: impl Into<String>,
        server_version: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            server_name: server_name.into(),
            server_version: server_version.into(),
            cache: OnceLock::new(),
        }
    }

    /// Get the descriptor, generating it on first use.
    ///
    /// The registry cannot change at runtime, so the cached value stays
    /// fresh for the whole process lifetime.
    pub fn generate(&self) -> Arc<Descriptor> {
        self.cache
            .get_or_init(|| {
                info!(
                    "Generating descriptor for {} tools",
                    self.registry.len()
                );
                Arc::new(self.build())
            })
            .clone()
    }

    fn build(&self) -> Descriptor {
        Descriptor {
            name: self.server_name.clone(),
            version: self.server_version.clone(),
            operations: self
                .registry
                .list()
                .map(|def| OperationEntry {
                    operation_id: def.name().to_string(),
                    description: def.description().to_string(),
                    input_schema: Value::Object(json_schema(def.schema())),
                    response: response_shape(),
                })
                .collect(),
        }
    }
}

/// The response shape shared by every operation.
fn response_shape() -> Value {
    json!({
        "type": "object",
        "properties": {
            "html": { "type": "string" }
        },
        "required": ["html"]
    })
}

/// Build the rmcp `Tool` model for a definition.
///
/// The stdio router advertises exactly this, derived from the same schema
/// projection as the descriptor, so `tools/list` and the descriptor cannot
/// disagree.
pub fn tool_model(definition: &ToolDefinition) -> Tool {
    Tool {
        name: definition.name().to_string().into(),
        description: Some(definition.description().to_string().into()),
        input_schema: Arc::new(json_schema(definition.schema())),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ToolsConfig;
    use crate::domains::data::DataStore;
    use crate::domains::tools::registry::build_registry;
    use std::collections::HashSet;

    fn generator() -> DescriptorGenerator {
        let registry =
            build_registry(&ToolsConfig::default(), Arc::new(DataStore::new())).unwrap();
        DescriptorGenerator::new(Arc::new(registry), "dynamic-html-app", "1.0.0")
    }

    #[test]
    fn test_bijection_with_registry() {
        let generator = generator();
        let descriptor = generator.generate();
        let ids: Vec<_> = descriptor
            .operations
            .iter()
            .map(|op| op.operation_id.as_str())
            .collect();
        assert_eq!(descriptor.operations.len(), generator.registry.len());
        assert_eq!(ids, generator.registry.names());
    }

    #[test]
    fn test_operation_ids_unique() {
        let descriptor = generator().generate();
        let ids: HashSet<_> = descriptor
            .operations
            .iter()
            .map(|op| op.operation_id.as_str())
            .collect();
        assert_eq!(ids.len(), descriptor.operations.len());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first_gen = generator();
        let first = serde_json::to_string(&*first_gen.generate()).unwrap();
        let second = serde_json::to_string(&*first_gen.generate()).unwrap();
        assert_eq!(first, second);

        // Two generators over equal registries also agree byte-for-byte.
        let other = serde_json::to_string(&*generator().generate()).unwrap();
        assert_eq!(first, other);
    }

    #[test]
    fn test_cache_is_permanent() {
        let descriptor_gen = generator();
        let first = descriptor_gen.generate();
        let second = descriptor_gen.generate();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_schema_details_preserved() {
        let descriptor = generator().generate();
        let metrics = descriptor
            .operations
            .iter()
            .find(|op| op.operation_id == "get_metrics_table")
            .unwrap();
        let properties = &metrics.input_schema["properties"];
        assert_eq!(
            properties["metric_type"]["enum"],
            json!(["sales", "performance", "engagement"])
        );
        assert_eq!(properties["metric_type"]["default"], "sales");
        assert_eq!(properties["limit"]["default"], 10);

        let profile = descriptor
            .operations
            .iter()
            .find(|op| op.operation_id == "get_user_profile")
            .unwrap();
        assert_eq!(profile.input_schema["required"], json!(["user_id"]));
    }

    #[test]
    fn test_response_shape_uniform() {
        let descriptor = generator().generate();
        for op in &descriptor.operations {
            assert_eq!(op.response["properties"]["html"]["type"], "string");
        }
    }

    #[test]
    fn test_tool_model_matches_descriptor() {
        let generator = generator();
        let descriptor = generator.generate();
        for (def, op) in generator.registry.list().zip(&descriptor.operations) {
            let tool = tool_model(def);
            assert_eq!(tool.name.as_ref(), op.operation_id);
            assert_eq!(Value::Object((*tool.input_schema).clone()), op.input_schema);
        }
    }
}
